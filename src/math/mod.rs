//! Mathematical utilities for color sampling

/// Linear interpolation over evenly spaced color stops
pub mod interpolation;
