// THEORY:
// The `classifier` module is the decision layer of the engine. A classifier
// looks at exactly one pixel's three channel values and answers a single
// question: which color class, if any, does this pixel belong to? Everything
// spatial (who its neighbors are, which region it joins) happens in later
// layers; the classifier itself is deliberately blind to position and history,
// so identical frames always produce identical labelings.
//
// Key architectural principles:
// 1.  **Pluggable Policy**: `PixelClassifier` is the injection point for the
//     whole engine. Any function or struct that reads three channels, may
//     rewrite them, and returns a `Label` can drive the same aggregation
//     machinery. The blanket impl for closures keeps one-off policies cheap
//     to express.
// 2.  **Highlight Rewrite**: A classifier may overwrite the channel values it
//     was handed. Built-in policies force matched pixels to a canonical
//     highlight color and unmatched pixels to black, producing a direct
//     visualization of the segmentation. Whether that rewrite reaches the
//     caller's buffer is decided by the layer running the pass, not here.
// 3.  **No Error Path**: A classifier that cannot place a pixel returns
//     `Label::Background`. There is nothing else that can go wrong with three
//     finite floats.

use crate::core_modules::frame::frame::Channel;

/// Identifier of a color class. Classifiers may define as many classes as
/// they like; the aggregation layers treat the value as opaque.
pub type ClusterId = u32;

/// The classification outcome for a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The pixel matched no color class and can never join a region.
    Background,
    /// The pixel belongs to the color class with this identifier.
    Cluster(ClusterId),
}

impl Label {
    pub fn is_background(&self) -> bool {
        matches!(self, Label::Background)
    }
}

/// The pluggable per-pixel color policy.
///
/// Implementations must be pure functions of the three channel values they are
/// handed. Position- or history-dependent classifiers produce undefined result
/// quality in the layers above.
pub trait PixelClassifier {
    /// Classifies one pixel. The channel triplet may be rewritten in place to
    /// produce a highlight visualization of the decision.
    fn classify(&self, channels: &mut [Channel; 3]) -> Label;
}

/// Any plain function or closure with the right shape is a classifier.
impl<F> PixelClassifier for F
where
    F: Fn(&mut [Channel; 3]) -> Label,
{
    fn classify(&self, channels: &mut [Channel; 3]) -> Label {
        self(channels)
    }
}

/// Lower bound on the red channel for a pixel to count as a red target.
const RED_TARGET_RED_FLOOR: Channel = 0.705;
/// Upper bound on the green and blue channels for a pixel to count as a red target.
const RED_TARGET_OTHER_CEIL: Channel = 0.32;

/// Detects a saturated red target.
///
/// Matched pixels are rewritten to pure red and unmatched pixels to black.
/// Pure red itself satisfies the predicate, so re-classifying an already
/// highlighted frame yields the same labeling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedTargetClassifier;

impl PixelClassifier for RedTargetClassifier {
    fn classify(&self, channels: &mut [Channel; 3]) -> Label {
        let [red, green, blue] = *channels;
        if red > RED_TARGET_RED_FLOOR && green < RED_TARGET_OTHER_CEIL && blue < RED_TARGET_OTHER_CEIL
        {
            *channels = [1.0, 0.0, 0.0];
            Label::Cluster(0)
        } else {
            *channels = [0.0, 0.0, 0.0];
            Label::Background
        }
    }
}

/// One entry in a `ColorRangeClassifier` table: an axis-aligned box in RGB
/// space, the cluster it maps to, and the color used to highlight members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    /// Inclusive lower bound per channel.
    pub min: [Channel; 3],
    /// Inclusive upper bound per channel.
    pub max: [Channel; 3],
    /// The cluster id assigned to pixels inside the box.
    pub cluster: ClusterId,
    /// The color matched pixels are rewritten to.
    pub highlight: [Channel; 3],
}

impl ColorBand {
    fn contains(&self, channels: &[Channel; 3]) -> bool {
        (0..3).all(|i| self.min[i] <= channels[i] && channels[i] <= self.max[i])
    }
}

/// A multi-cluster color-table policy.
///
/// Bands are checked in table order and the first match wins, so overlapping
/// bands resolve deterministically. Pixels outside every band are rewritten to
/// black and labeled background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorRangeClassifier {
    bands: Vec<ColorBand>,
}

impl ColorRangeClassifier {
    pub fn new(bands: Vec<ColorBand>) -> Self {
        Self { bands }
    }

    /// Single-band table matching strongly red pixels: red above 0.75 with
    /// green and blue both below 0.20, highlighted as pure red.
    pub fn simple_red() -> Self {
        Self::new(vec![ColorBand {
            min: [0.75, 0.0, 0.0],
            max: [1.0, 0.20, 0.20],
            cluster: 0,
            highlight: [1.0, 0.0, 0.0],
        }])
    }
}

impl PixelClassifier for ColorRangeClassifier {
    fn classify(&self, channels: &mut [Channel; 3]) -> Label {
        for band in &self.bands {
            if band.contains(channels) {
                *channels = band.highlight;
                return Label::Cluster(band.cluster);
            }
        }
        *channels = [0.0, 0.0, 0.0];
        Label::Background
    }
}
