// This file is an example of how to use the `chroma_vision` library.
// The main library entry point is `src/lib.rs`.
//
// It builds a synthetic camera frame containing one red target, runs the
// segmentation pipeline over it, and prints each detected region both in
// human-readable form and in the "x*y" string form a host signal channel
// typically carries. Translating regions into that wire form is caller
// territory, which is why it lives here and not in the library.

use chroma_vision::core_modules::utils::image_helper::image_helper;
use chroma_vision::pipeline::{
    RedTargetClassifier, RewriteMode, SegmentationConfig, SegmentationPipeline,
};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 64;

fn main() -> anyhow::Result<()> {
    println!("Chroma Vision Engine - Example Runner");

    // A dim gray scene with one red disc near the upper right.
    let mut buffer = vec![0.05f32; (WIDTH * HEIGHT * 3) as usize];
    paint_disc(&mut buffer, 44, 20, 9, [0.9, 0.1, 0.1]);

    let config = SegmentationConfig {
        rewrite: RewriteMode::InPlace,
        ..SegmentationConfig::default()
    };
    let pipeline = SegmentationPipeline::new(config);
    let regions = pipeline.process_frame(&mut buffer, WIDTH, HEIGHT, &RedTargetClassifier);

    if regions.is_empty() {
        println!("No qualifying region found.");
    }
    for region in &regions {
        println!(
            "region {}: cluster {}, {} px, centroid ({:.2}, {:.2})",
            region.id, region.cluster, region.pixel_count, region.centroid.0, region.centroid.1
        );
        // The wire form a downstream tracker reads off the signal channel.
        println!("  signal payload: {}*{}", region.centroid.0, region.centroid.1);
    }

    // The in-place rewrite turned the buffer into a highlight visualization.
    let snapshot = std::env::temp_dir().join("chroma_vision_highlight.png");
    image_helper::save(&snapshot, WIDTH, HEIGHT, &buffer)?;
    println!("Highlight snapshot written to {}", snapshot.display());

    Ok(())
}

/// Paints a filled disc into a row-major RGB buffer.
fn paint_disc(buffer: &mut [f32], cx: i64, cy: i64, radius: i64, color: [f32; 3]) {
    for y in 0..HEIGHT as i64 {
        for x in 0..WIDTH as i64 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= radius * radius {
                let start = ((y * WIDTH as i64 + x) * 3) as usize;
                buffer[start..start + 3].copy_from_slice(&color);
            }
        }
    }
}
