//! Canvas initialization and the two split operations
//!
//! A split appends one rectangle and shrinks one existing rectangle in place,
//! so indices of earlier rectangles never change.

use crate::{
    algorithm::selection::{Orientation, choose_break},
    io::error::{AlgorithmError, Result},
    spatial::{Rectangle, Tiling},
};
use rand::Rng;

/// One applied split: which rectangle, along which axis, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitRecord {
    /// Index of the rectangle that was divided (and shrunk in place)
    pub index: usize,
    /// Axis that was divided
    pub orientation: Orientation,
    /// Coordinate of the new shared edge
    pub break_point: i64,
}

/// Create the single-rectangle tiling spanning the canvas
///
/// # Errors
///
/// Returns `InvalidDimension` if either dimension is not positive
pub fn initialize(canvas_width: i64, canvas_height: i64) -> Result<Tiling> {
    Tiling::canvas(canvas_width, canvas_height)
}

/// Divide rectangle `index` into two side-by-side rectangles
///
/// The divided rectangle keeps `[left, break)` and the appended rectangle takes
/// `[break, right)` with the same top and bottom.
///
/// # Errors
///
/// Returns `InvalidRectangleIndex` for an unknown index, or
/// `DegenerateSplit` if the rectangle is narrower than two units
pub fn split_horizontally<R: Rng + ?Sized>(
    tiling: &mut Tiling,
    index: usize,
    rng: &mut R,
) -> Result<SplitRecord> {
    split(tiling, index, Orientation::Horizontal, rng)
}

/// Divide rectangle `index` into two stacked rectangles
///
/// The divided rectangle keeps `[bottom, break)` and the appended rectangle takes
/// `[break, top)` with the same left and right.
///
/// # Errors
///
/// Returns `InvalidRectangleIndex` for an unknown index, or
/// `DegenerateSplit` if the rectangle is shorter than two units
pub fn split_vertically<R: Rng + ?Sized>(
    tiling: &mut Tiling,
    index: usize,
    rng: &mut R,
) -> Result<SplitRecord> {
    split(tiling, index, Orientation::Vertical, rng)
}

/// Divide rectangle `index` along `orientation` at a random break point
///
/// # Errors
///
/// See [`split_horizontally`] and [`split_vertically`]
pub fn split<R: Rng + ?Sized>(
    tiling: &mut Tiling,
    index: usize,
    orientation: Orientation,
    rng: &mut R,
) -> Result<SplitRecord> {
    let target = *tiling.get(index).ok_or(AlgorithmError::InvalidRectangleIndex {
        index,
        len: tiling.len(),
    })?;
    let (a, b) = orientation.bounds(&target);
    let break_point = choose_break(a, b, rng)?;

    let record = SplitRecord {
        index,
        orientation,
        break_point,
    };
    apply_split(tiling, &record)?;
    Ok(record)
}

/// Apply a previously chosen split
///
/// # Errors
///
/// Returns `InvalidRectangleIndex` for an unknown index, or
/// `DegenerateSplit` if the break point is not strictly inside the extent
pub(crate) fn apply_split(tiling: &mut Tiling, record: &SplitRecord) -> Result<()> {
    let target = tiling.get_mut(record.index)?;
    let (a, b) = record.orientation.bounds(target);
    let (lo, hi) = (a.min(b), a.max(b));
    if record.break_point <= lo || record.break_point >= hi {
        return Err(AlgorithmError::DegenerateSplit { lo, hi });
    }

    let appended = match record.orientation {
        Orientation::Horizontal => {
            let appended = Rectangle::new(
                record.break_point,
                target.right,
                target.top,
                target.bottom,
            );
            target.right = record.break_point;
            appended
        }
        Orientation::Vertical => {
            let appended = Rectangle::new(
                target.left,
                target.right,
                target.top,
                record.break_point,
            );
            target.top = record.break_point;
            appended
        }
    };

    tiling.push(appended);
    Ok(())
}
