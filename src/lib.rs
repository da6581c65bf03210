//! Abstract art by area-weighted recursive rectangle subdivision
//!
//! A canvas starts as one rectangle. Each iteration picks a rectangle with
//! probability proportional to its area and splits it in two at a random grid
//! line, so the result always tiles the canvas exactly. The finished tiling is
//! then colored from a palette and rendered to PNG.

#![forbid(unsafe_code)]

/// Subdivision engine: selection, splitting and the iteration loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for color interpolation
pub mod math;
/// Rectangle and tiling geometry
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
