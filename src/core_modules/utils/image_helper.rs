pub mod image_helper {
    use crate::core_modules::frame::frame::Channel;
    use image::ImageEncoder;
    use std::path::Path;

    /// Saves a normalized RGB channel buffer as an 8-bit PNG. Channel values
    /// are clamped to [0.0, 1.0] before quantization, so out-of-range
    /// classifier output still produces a valid file.
    pub fn save<P: AsRef<Path>>(
        path: P,
        width: u32,
        height: u32,
        buffer: &[Channel],
    ) -> Result<(), image::error::ImageError> {
        let bytes: Vec<u8> = buffer
            .iter()
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();

        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        encoder.write_image(&bytes, width, height, image::ExtendedColorType::Rgb8)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;

    #[test]
    fn save_red_file() {
        let width = 32u32;
        let height = 32u32;
        let mut buffer = vec![0.0f32; (width * height * 3) as usize];
        for pixel in buffer.chunks_mut(3) {
            pixel[0] = 1.0;
        }
        let path = std::env::temp_dir().join("chroma_vision_red_file.png");

        save(&path, width, height, &buffer).expect("Error Saving File.");
    }

    #[test]
    fn save_clamps_out_of_range_channels() {
        let width = 2u32;
        let height = 1u32;
        let buffer = vec![1.5f32, -0.5, 0.5, 0.0, 1.0, 0.25];
        let path = std::env::temp_dir().join("chroma_vision_clamped_file.png");

        save(&path, width, height, &buffer).expect("Error Saving File.");
    }
}
