//! Canvas geometry
//!
//! This module contains:
//! - The rectangle record with its derived area
//! - The tiling collection and its invariant checks

/// Rectangle record and color type
pub mod rectangle;
/// Ordered rectangle collection covering the canvas
pub mod tiling;

pub use rectangle::{Color, Rectangle};
pub use tiling::Tiling;
