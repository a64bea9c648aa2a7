// THEORY:
// The `label_map` module is the bridge between the decision layer and the
// spatial grouping layer. It runs the classifier over every pixel of a frame
// exactly once, in row-major order, and collects the outcomes into a grid of
// labels parallel to the frame. That grid is the only thing the region
// extractor ever looks at.
//
// The classify pass always hands the classifier a scratch copy of the pixel's
// channels. Under `RewriteMode::InPlace` the (possibly rewritten) copy is
// written back to the frame, producing the highlight visualization; under
// `RewriteMode::Labels` the copy is discarded and the caller's buffer stays
// byte-identical.

use crate::core_modules::classifier::{Label, PixelClassifier};
use crate::core_modules::frame::frame::FrameView;

/// Controls whether classifier channel rewrites reach the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// Classify on a scratch copy of each pixel and leave the frame untouched.
    #[default]
    Labels,
    /// Write the classifier's highlight rewrites back into the frame.
    InPlace,
}

/// A grid of per-pixel labels parallel to the frame it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<Label>,
}

impl LabelMap {
    /// Builds a label map directly from a prepared label grid.
    ///
    /// # Panics
    ///
    /// Panics if `labels.len()` is not exactly `width * height`.
    pub fn new(width: u32, height: u32, labels: Vec<Label>) -> Self {
        let expected = width as usize * height as usize;
        if labels.len() != expected {
            panic!(
                "Cannot use {} labels as a {}x{} map (expected {}).",
                labels.len(),
                width,
                height,
                expected
            );
        }
        Self {
            width,
            height,
            labels,
        }
    }

    /// Runs the classifier over every pixel of the frame, in row-major order.
    pub fn from_frame<C: PixelClassifier>(
        frame: &mut FrameView<'_>,
        classifier: &C,
        mode: RewriteMode,
    ) -> Self {
        let mut labels = Vec::with_capacity(frame.pixel_count());
        for index in 0..frame.pixel_count() {
            let mut channels = frame.channels(index);
            labels.push(classifier.classify(&mut channels));
            if mode == RewriteMode::InPlace {
                frame.set_channels(index, channels);
            }
        }
        Self {
            width: frame.width(),
            height: frame.height(),
            labels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The label of the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Label {
        self.labels[(y * self.width + x) as usize]
    }

    /// The full label grid in row-major order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}
