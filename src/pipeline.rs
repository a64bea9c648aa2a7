// THEORY:
// The `pipeline` module is the final, top-level API for the segmentation
// engine. It wires the classify pass and the region extractor together behind
// a single per-frame entry point, with all tunable behavior gathered into one
// config struct. The pipeline itself holds nothing but that immutable config:
// every invocation allocates its own scratch state, so calls are independent,
// nothing persists between frames, and one pipeline value can serve several
// threads processing distinct buffers.

use crate::core_modules::frame::frame::FrameView;
use crate::core_modules::region_extractor::region_extractor;

// Re-export key data structures for the public API.
pub use crate::core_modules::classifier::{
    ClusterId, ColorBand, ColorRangeClassifier, Label, PixelClassifier, RedTargetClassifier,
};
pub use crate::core_modules::frame::frame::Channel;
pub use crate::core_modules::label_map::{LabelMap, RewriteMode};
pub use crate::core_modules::region::{Point, Region};
pub use crate::core_modules::region_extractor::region_extractor::{Connectivity, ThresholdRule};

/// Size floor applied when no explicit threshold is configured. Small enough
/// to keep real targets, large enough to drop single-pixel sensor speckle.
const DEFAULT_MIN_REGION_SIZE: usize = 10;

/// Configuration for the SegmentationPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct SegmentationConfig {
    /// Which connected components are worth reporting. The same numeric knob
    /// can be read as a pixel-count floor or as a cap on the number of
    /// returned regions; both interpretations live here.
    pub size_threshold: ThresholdRule,
    /// Adjacency rule used when merging same-class pixels.
    pub connectivity: Connectivity,
    /// Whether classifier highlight rewrites reach the caller's buffer.
    pub rewrite: RewriteMode,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            size_threshold: ThresholdRule::MinPixelCount(DEFAULT_MIN_REGION_SIZE),
            connectivity: Connectivity::Four,
            rewrite: RewriteMode::Labels,
        }
    }
}

/// The main, top-level struct for the segmentation engine.
pub struct SegmentationPipeline {
    config: SegmentationConfig,
}

impl SegmentationPipeline {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// The full per-frame pass: classify every pixel, group matching
    /// neighbors into connected regions, and report the survivors of the
    /// size threshold in row-major first-encounter order.
    ///
    /// `buffer` is the caller's row-major RGB channel buffer; it is only
    /// mutated under `RewriteMode::InPlace`. An empty result means no
    /// qualifying region was found.
    ///
    /// # Panics
    ///
    /// Panics if `buffer.len()` disagrees with `width * height * 3`.
    pub fn process_frame<C: PixelClassifier>(
        &self,
        buffer: &mut [Channel],
        width: u32,
        height: u32,
        classifier: &C,
    ) -> Vec<Region> {
        let mut frame = FrameView::new(buffer, width, height);
        if frame.is_empty() {
            return Vec::new();
        }
        let labels = LabelMap::from_frame(&mut frame, classifier, self.config.rewrite);
        region_extractor::extract_regions(
            &labels,
            self.config.connectivity,
            self.config.size_threshold,
        )
    }

    /// The classify pass alone: a label map for the frame, with the buffer
    /// left untouched regardless of the configured rewrite mode.
    pub fn label_frame<C: PixelClassifier>(
        &self,
        buffer: &mut [Channel],
        width: u32,
        height: u32,
        classifier: &C,
    ) -> LabelMap {
        let mut frame = FrameView::new(buffer, width, height);
        LabelMap::from_frame(&mut frame, classifier, RewriteMode::Labels)
    }

    /// Applies the classifier's highlight rewrite to every pixel with no
    /// spatial grouping: matched pixels get their canonical highlight color,
    /// everything else is blanked. The single-pass threshold visualization.
    pub fn highlight_frame<C: PixelClassifier>(
        &self,
        buffer: &mut [Channel],
        width: u32,
        height: u32,
        classifier: &C,
    ) {
        let mut frame = FrameView::new(buffer, width, height);
        for index in 0..frame.pixel_count() {
            let mut channels = frame.channels(index);
            classifier.classify(&mut channels);
            frame.set_channels(index, channels);
        }
    }
}
