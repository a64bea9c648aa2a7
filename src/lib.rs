// THEORY:
// This file is the main entry point for the `chroma_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like a host simulation bridge
// or a tracking control loop).
//
// The primary goal is to export the `SegmentationPipeline` and its associated
// data structures (`SegmentationConfig`, `Region`, etc.) as the clean,
// high-level interface for the entire segmentation engine. The internal layers
// (`core_modules`) stay encapsulated behind it, providing a clean separation
// of concerns.

pub mod core_modules;
pub mod pipeline;
