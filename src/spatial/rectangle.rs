//! Axis-aligned rectangle record on the integer canvas grid

/// RGBA color assigned to a rectangle
pub type Color = [u8; 4];

/// Axis-aligned rectangle in canvas units
///
/// Y grows upward, so `top > bottom` for every valid rectangle. The area is
/// derived from the bounds on every read and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Smaller X bound
    pub left: i64,
    /// Larger X bound
    pub right: i64,
    /// Larger Y bound
    pub top: i64,
    /// Smaller Y bound
    pub bottom: i64,
    /// Fill color, absent until a palette has been assigned
    pub color: Option<Color>,
}

impl Rectangle {
    /// Create an uncolored rectangle from its bounds
    pub const fn new(left: i64, right: i64, top: i64, bottom: i64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            color: None,
        }
    }

    /// Horizontal extent
    pub const fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Vertical extent
    pub const fn height(&self) -> i64 {
        self.top - self.bottom
    }

    /// Area recomputed from the current bounds
    ///
    /// Zero for degenerate or inverted rectangles.
    pub const fn area(&self) -> u64 {
        if self.is_valid() {
            self.width() as u64 * self.height() as u64
        } else {
            0
        }
    }

    /// Whether both extents are strictly positive
    pub const fn is_valid(&self) -> bool {
        self.right > self.left && self.top > self.bottom
    }

    /// Whether the open interiors of two rectangles intersect
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }

    /// Whether this rectangle lies inside `[0, width] x [0, height]`
    pub const fn within_canvas(&self, width: i64, height: i64) -> bool {
        self.left >= 0 && self.bottom >= 0 && self.right <= width && self.top <= height
    }
}
