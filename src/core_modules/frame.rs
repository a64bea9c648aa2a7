// THEORY:
// The `frame` module is the most fundamental layer of the engine. It provides a
// borrowed, geometry-checked view over a caller-owned pixel buffer. The buffer
// is a dense row-major grid of `f32` channel triplets (R, G, B), the raw form
// a camera-style host hands over once per frame.
//
// Key architectural principles:
// 1.  **Caller Ownership**: The view never allocates, resizes, or retains the
//     buffer. It exists only for the duration of one processing call, and every
//     access stays inside the declared `width x height` extent.
// 2.  **Copy-out Channel Access**: Pixels are read as plain `[Channel; 3]`
//     arrays and written back explicitly. This keeps the borrow rules simple
//     and lets the caller of `channels`/`set_channels` decide whether a
//     classifier's rewrite ever reaches the real buffer.
// 3.  **Geometry as a Precondition**: A buffer whose length disagrees with the
//     declared dimensions is a caller programming error, rejected immediately
//     rather than silently truncated. A zero-area frame is legal and simply
//     contains no pixels.

pub mod frame {
    /// A single color channel intensity, conceptually in the range [0.0, 1.0].
    pub type Channel = f32;

    /// Channels per pixel. The engine works on packed RGB triplets.
    pub const CHANNELS: usize = 3;

    /// A borrowed, mutable view over a caller-owned row-major RGB frame buffer.
    pub struct FrameView<'a> {
        buffer: &'a mut [Channel],
        width: u32,
        height: u32,
    }

    impl<'a> FrameView<'a> {
        /// Wraps a raw channel buffer together with its declared geometry.
        ///
        /// # Panics
        ///
        /// Panics if `buffer.len()` is not exactly `width * height * CHANNELS`.
        pub fn new(buffer: &'a mut [Channel], width: u32, height: u32) -> Self {
            let expected = width as usize * height as usize * CHANNELS;
            if buffer.len() != expected {
                panic!(
                    "Cannot view {} channel values as a {}x{} frame (expected {}).",
                    buffer.len(),
                    width,
                    height,
                    expected
                );
            }
            Self {
                buffer,
                width,
                height,
            }
        }

        /// The frame width in pixels.
        pub fn width(&self) -> u32 {
            self.width
        }

        /// The frame height in pixels.
        pub fn height(&self) -> u32 {
            self.height
        }

        /// True when either dimension is zero. Such a frame holds no pixels and
        /// every per-pixel pass over it is a no-op.
        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }

        /// Total number of pixels in the frame.
        pub fn pixel_count(&self) -> usize {
            self.width as usize * self.height as usize
        }

        /// Reads the channel triplet of the pixel at a flat row-major index
        /// (`y * width + x`).
        pub fn channels(&self, index: usize) -> [Channel; CHANNELS] {
            let start = index * CHANNELS;
            [
                self.buffer[start],
                self.buffer[start + 1],
                self.buffer[start + 2],
            ]
        }

        /// Writes a channel triplet back to the pixel at a flat row-major index.
        pub fn set_channels(&mut self, index: usize, channels: [Channel; CHANNELS]) {
            let start = index * CHANNELS;
            self.buffer[start..start + CHANNELS].copy_from_slice(&channels);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::frame::*;

    #[test]
    fn channel_roundtrip_preserves_values() {
        let mut buffer = vec![0.0f32; 2 * 2 * CHANNELS];
        let mut view = FrameView::new(&mut buffer, 2, 2);

        view.set_channels(3, [0.25, 0.5, 0.75]);

        assert_eq!(view.channels(3), [0.25, 0.5, 0.75]);
        assert_eq!(view.channels(0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_area_frame_is_empty() {
        let mut buffer: Vec<f32> = Vec::new();
        let view = FrameView::new(&mut buffer, 0, 4);
        assert!(view.is_empty());
        assert_eq!(view.pixel_count(), 0);
    }

    #[test]
    #[should_panic(expected = "Cannot view")]
    fn mismatched_buffer_length_is_rejected() {
        let mut buffer = vec![0.0f32; 10];
        let _ = FrameView::new(&mut buffer, 2, 2);
    }
}
