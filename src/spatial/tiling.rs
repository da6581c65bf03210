//! Insertion-ordered rectangle collection covering a canvas
//!
//! Indices are stable: rectangles are only ever appended or shrunk in place,
//! never removed or reordered. Mutation is restricted to the subdivision
//! engine; once a `Tiling` leaves the engine it can only be read or colored.

use ndarray::Array2;

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{AlgorithmError, Result, tiling_violation};
use crate::spatial::rectangle::{Color, Rectangle};

/// Marker for a unit cell not covered by any rectangle
pub const UNOWNED_CELL: usize = usize::MAX;

/// Ordered set of rectangles partitioning a `canvas_width x canvas_height` canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiling {
    canvas_width: i64,
    canvas_height: i64,
    rectangles: Vec<Rectangle>,
}

impl Tiling {
    /// Create a tiling holding the single full-canvas rectangle
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not positive or
    /// exceeds `MAX_CANVAS_DIMENSION`
    pub fn canvas(canvas_width: i64, canvas_height: i64) -> Result<Self> {
        validate_dimension("width", canvas_width)?;
        validate_dimension("height", canvas_height)?;

        Ok(Self {
            canvas_width,
            canvas_height,
            rectangles: vec![Rectangle::new(0, canvas_width, canvas_height, 0)],
        })
    }

    /// Canvas width in canvas units
    pub const fn canvas_width(&self) -> i64 {
        self.canvas_width
    }

    /// Canvas height in canvas units
    pub const fn canvas_height(&self) -> i64 {
        self.canvas_height
    }

    /// Area of the whole canvas
    pub const fn canvas_area(&self) -> u64 {
        self.canvas_width as u64 * self.canvas_height as u64
    }

    /// Number of rectangles
    pub const fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Always false for a tiling built through `canvas`
    pub const fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Rectangle at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rectangles.get(index)
    }

    /// Iterate rectangles in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rectangles.iter()
    }

    /// Current area of every rectangle
    pub fn areas(&self) -> Vec<u64> {
        self.rectangles.iter().map(Rectangle::area).collect()
    }

    /// Sum of all rectangle areas
    pub fn total_area(&self) -> u64 {
        self.rectangles.iter().map(Rectangle::area).sum()
    }

    /// Whether every rectangle carries a color
    pub fn is_colored(&self) -> bool {
        self.rectangles.iter().all(|r| r.color.is_some())
    }

    /// Assign one color per rectangle, by position
    ///
    /// # Errors
    ///
    /// Returns `PaletteMismatch` if the number of colors differs from the
    /// number of rectangles
    pub fn assign_colors(mut self, colors: Vec<Color>) -> Result<Self> {
        if colors.len() != self.rectangles.len() {
            return Err(AlgorithmError::PaletteMismatch {
                colors: colors.len(),
                rectangles: self.rectangles.len(),
            });
        }

        for (rectangle, color) in self.rectangles.iter_mut().zip(colors) {
            rectangle.color = Some(color);
        }
        Ok(self)
    }

    /// Check every tiling invariant
    ///
    /// # Errors
    ///
    /// Returns `TilingViolation` describing the first broken invariant, see
    /// [`verify_partition`]
    pub fn verify(&self) -> Result<()> {
        verify_partition(self.canvas_width, self.canvas_height, &self.rectangles)
    }

    /// Map every unit cell of the canvas to the rectangle covering it
    ///
    /// # Errors
    ///
    /// See [`partition_cell_owners`]
    pub fn cell_owners(&self) -> Result<Array2<usize>> {
        partition_cell_owners(self.canvas_width, self.canvas_height, &self.rectangles)
    }

    /// Image-order row and column ranges covered by a rectangle
    pub(crate) fn cell_span(
        &self,
        rectangle: &Rectangle,
    ) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        cell_span(self.canvas_width, self.canvas_height, rectangle)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Rectangle> {
        let len = self.rectangles.len();
        self.rectangles
            .get_mut(index)
            .ok_or(AlgorithmError::InvalidRectangleIndex { index, len })
    }

    pub(crate) fn push(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
    }
}

impl<'a> IntoIterator for &'a Tiling {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rectangles.iter()
    }
}

/// Check that `rectangles` partition a `canvas_width x canvas_height` canvas
///
/// Rectangles must have positive area, lie inside the canvas, have
/// pairwise disjoint interiors, and their areas must sum to the canvas
/// area. Together these imply the canvas is covered without gaps.
///
/// # Errors
///
/// Returns `TilingViolation` describing the first broken invariant
pub fn verify_partition(
    canvas_width: i64,
    canvas_height: i64,
    rectangles: &[Rectangle],
) -> Result<()> {
    for (index, rectangle) in rectangles.iter().enumerate() {
        if !rectangle.is_valid() {
            return Err(tiling_violation(&format!(
                "rectangle {index} has non-positive extent {rectangle:?}"
            )));
        }
        if !rectangle.within_canvas(canvas_width, canvas_height) {
            return Err(tiling_violation(&format!(
                "rectangle {index} leaves the {canvas_width}x{canvas_height} canvas"
            )));
        }
    }

    let total: u64 = rectangles.iter().map(Rectangle::area).sum();
    let canvas_area = canvas_width.unsigned_abs() * canvas_height.unsigned_abs();
    if total != canvas_area {
        return Err(tiling_violation(&format!(
            "areas sum to {total}, canvas area is {canvas_area}"
        )));
    }

    if let Some((a, b)) = first_overlap(rectangles) {
        return Err(tiling_violation(&format!(
            "rectangles {a} and {b} overlap"
        )));
    }

    Ok(())
}

/// Map every unit cell of the canvas to the rectangle in `rectangles` covering it
///
/// Rows follow image order: row 0 is the topmost unit row of the canvas,
/// so the cell spanning `[y, y + 1)` lives in row `canvas_height - 1 - y`.
///
/// # Errors
///
/// Returns `TilingViolation` if a rectangle leaves the canvas or a cell is
/// covered twice or not at all
pub fn partition_cell_owners(
    canvas_width: i64,
    canvas_height: i64,
    rectangles: &[Rectangle],
) -> Result<Array2<usize>> {
    let rows = canvas_height.max(0) as usize;
    let cols = canvas_width.max(0) as usize;
    let mut owners = Array2::from_elem((rows, cols), UNOWNED_CELL);

    for (index, rectangle) in rectangles.iter().enumerate() {
        if !rectangle.within_canvas(canvas_width, canvas_height) {
            return Err(tiling_violation(&format!(
                "rectangle {index} leaves the {canvas_width}x{canvas_height} canvas"
            )));
        }

        let (row_range, col_range) = cell_span(canvas_width, canvas_height, rectangle);
        for row in row_range {
            for col in col_range.clone() {
                let Some(cell) = owners.get_mut([row, col]) else {
                    return Err(tiling_violation(&format!(
                        "rectangle {index} covers cell ({row}, {col}) outside the canvas"
                    )));
                };
                if *cell != UNOWNED_CELL {
                    return Err(tiling_violation(&format!(
                        "cell ({row}, {col}) covered by rectangles {} and {index}",
                        *cell
                    )));
                }
                *cell = index;
            }
        }
    }

    if let Some(((row, col), _)) = owners.indexed_iter().find(|(_, o)| **o == UNOWNED_CELL) {
        return Err(tiling_violation(&format!(
            "cell ({row}, {col}) is not covered"
        )));
    }

    Ok(owners)
}

// Sweep along X to find the first pair of overlapping rectangles
fn first_overlap(rectangles: &[Rectangle]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..rectangles.len()).collect();
    order.sort_by_key(|&i| rectangles.get(i).map_or(0, |r| r.left));

    for (position, &i) in order.iter().enumerate() {
        let Some(current) = rectangles.get(i) else {
            continue;
        };
        // Later rectangles start at or after `current.left`; stop once they
        // start at or past its right edge
        for &j in order.iter().skip(position + 1) {
            let Some(candidate) = rectangles.get(j) else {
                continue;
            };
            if candidate.left >= current.right {
                break;
            }
            if current.overlaps(candidate) {
                return Some((i.min(j), i.max(j)));
            }
        }
    }
    None
}

fn cell_span(
    canvas_width: i64,
    canvas_height: i64,
    rectangle: &Rectangle,
) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let clamp_y = |v: i64| v.clamp(0, canvas_height);
    let clamp_x = |v: i64| v.clamp(0, canvas_width);
    let row_start = (canvas_height - clamp_y(rectangle.top)) as usize;
    let row_end = (canvas_height - clamp_y(rectangle.bottom)) as usize;
    let col_start = clamp_x(rectangle.left) as usize;
    let col_end = clamp_x(rectangle.right) as usize;
    (row_start..row_end, col_start..col_end)
}

fn validate_dimension(parameter: &'static str, value: i64) -> Result<()> {
    if value <= 0 || value > MAX_CANVAS_DIMENSION {
        return Err(AlgorithmError::InvalidDimension { parameter, value });
    }
    Ok(())
}
