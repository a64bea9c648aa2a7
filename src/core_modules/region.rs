// THEORY:
// The `region` module defines the output records of the spatial grouping
// layer. A `Region` is a single connected patch of same-class pixels observed
// in one frame. It is a "dumb" data container: created fresh during a frame's
// extraction pass, reported to the caller, then discarded. It carries no
// memory of earlier frames and no reference back into the frame buffer.
//
// The invariants the extractor guarantees for a frame's region set:
// - every non-background pixel belongs to exactly one region;
// - regions never overlap;
// - ids count up from 0 in emission order, which is the order of each
//   region's first-encountered pixel in the row-major scan.

use crate::core_modules::classifier::ClusterId;

/// A simple struct to represent a 2D pixel coordinate on the frame grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A single connected patch of same-class pixels detected in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Identifier for this region within the current frame only. Not persistent.
    pub id: u64,
    /// The color class every member pixel was assigned.
    pub cluster: ClusterId,
    /// Top-left and bottom-right corners of the rectangle enclosing all
    /// member pixels.
    pub bounding_box: (Point, Point),
    /// The number of member pixels, i.e. the region's area.
    pub pixel_count: usize,
    /// Mean (x, y) coordinate of the member pixels. Real-valued, never
    /// rounded to the pixel grid.
    pub centroid: (f64, f64),
}
