use crate::{
    io::configuration::MAX_BREAK_RESAMPLES,
    io::error::{AlgorithmError, Result},
    spatial::{Rectangle, Tiling},
};
use rand::Rng;

/// Axis along which a rectangle is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Divide the left/right extent into two side-by-side rectangles
    Horizontal,
    /// Divide the top/bottom extent into two stacked rectangles
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Bounds of the extent this orientation divides
    pub const fn bounds(self, rectangle: &Rectangle) -> (i64, i64) {
        match self {
            Self::Horizontal => (rectangle.left, rectangle.right),
            Self::Vertical => (rectangle.top, rectangle.bottom),
        }
    }

    /// Whether the rectangle has an interior grid line along this axis
    pub const fn can_split(self, rectangle: &Rectangle) -> bool {
        let (a, b) = self.bounds(rectangle);
        a.abs_diff(b) >= 2
    }
}

/// Draw an orientation uniformly
pub fn choose_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Pick an integer break point strictly between `a` and `b`
///
/// The bounds may be given in either order. A uniform fraction of the span
/// is rounded to the grid; draws that land on a bound are redrawn, which
/// keeps the result uniform over the interior points. After
/// `MAX_BREAK_RESAMPLES` boundary hits the last draw is clamped inward.
///
/// # Errors
///
/// Returns `DegenerateSplit` when the span has no interior grid point
pub fn choose_break<R: Rng + ?Sized>(a: i64, b: i64, rng: &mut R) -> Result<i64> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo < 2 {
        return Err(AlgorithmError::DegenerateSplit { lo, hi });
    }

    let span = (hi - lo) as f64;
    let mut candidate = lo;
    for _ in 0..MAX_BREAK_RESAMPLES {
        let fraction: f64 = rng.random();
        candidate = lo + (fraction * span).round() as i64;
        if candidate > lo && candidate < hi {
            return Ok(candidate);
        }
        tracing::trace!(lo, hi, candidate, "break point on boundary, redrawing");
    }

    Ok(candidate.clamp(lo + 1, hi - 1))
}

/// Selection weight of every rectangle
///
/// Each weight is the rectangle's area. Unit squares cannot be divided on
/// the integer grid and get weight zero.
pub fn selection_weights(tiling: &Tiling) -> Vec<u64> {
    tiling
        .iter()
        .map(|r| {
            if Orientation::Horizontal.can_split(r) || Orientation::Vertical.can_split(r) {
                r.area()
            } else {
                0
            }
        })
        .collect()
}

/// Draw an index with probability proportional to its integer weight
///
/// Exact categorical sampling: a ticket is drawn uniformly from
/// `0..sum(weights)` and mapped through the cumulative weights. Returns
/// `None` when every weight is zero.
pub fn area_weighted_index<R: Rng + ?Sized>(weights: &[u64], rng: &mut R) -> Option<usize> {
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return None;
    }

    let mut ticket = rng.random_range(0..total);
    for (i, &weight) in weights.iter().enumerate() {
        if ticket < weight {
            return Some(i);
        }
        ticket -= weight;
    }
    None
}
