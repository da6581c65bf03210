use crate::{
    algorithm::selection::{area_weighted_index, choose_orientation, selection_weights},
    algorithm::split::{SplitRecord, apply_split, initialize, split},
    io::error::{AlgorithmError, Result},
    spatial::Tiling,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Area-weighted recursive subdivision of a canvas
///
/// Owns the evolving tiling and the random source. Each iteration picks a
/// rectangle with probability proportional to its area, picks an axis
/// uniformly, and splits it at a uniformly drawn interior grid line.
pub struct Subdivision<R = StdRng> {
    tiling: Tiling,
    rng: R,
    history: Vec<SplitRecord>,
}

impl Subdivision<StdRng> {
    /// Create a deterministic engine seeded from `seed`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not positive
    pub fn new(canvas_width: i64, canvas_height: i64, seed: u64) -> Result<Self> {
        Self::with_rng(canvas_width, canvas_height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Subdivision<R> {
    /// Create an engine drawing from the given random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not positive
    pub fn with_rng(canvas_width: i64, canvas_height: i64, rng: R) -> Result<Self> {
        Ok(Self {
            tiling: initialize(canvas_width, canvas_height)?,
            rng,
            history: Vec::new(),
        })
    }

    /// Current tiling
    pub const fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    /// Splits applied so far, in order
    pub fn history(&self) -> &[SplitRecord] {
        &self.history
    }

    /// Number of completed iterations
    pub const fn iteration(&self) -> usize {
        self.history.len()
    }

    /// Check that `iterations` more splits fit on the integer grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidIterationCount` if the count is negative or would need
    /// more rectangles than the canvas has unit cells
    pub fn validate_iterations(&self, iterations: i64) -> Result<usize> {
        if iterations < 0 {
            return Err(AlgorithmError::InvalidIterationCount {
                value: iterations,
                reason: "must not be negative".to_string(),
            });
        }
        let count = iterations as usize;

        let capacity = self.tiling.canvas_area();
        let required = self.tiling.len() as u64 + count as u64;
        if required > capacity {
            return Err(AlgorithmError::InvalidIterationCount {
                value: iterations,
                reason: format!(
                    "a {}x{} canvas holds at most {capacity} rectangles, {required} requested",
                    self.tiling.canvas_width(),
                    self.tiling.canvas_height()
                ),
            });
        }
        Ok(count)
    }

    /// Perform one area-weighted split
    ///
    /// If the drawn axis is too short to divide, the perpendicular axis is
    /// used instead; only unit squares are excluded from selection, so one
    /// of the two axes always has room.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIterationCount` if every rectangle is a unit square
    pub fn execute_iteration(&mut self) -> Result<SplitRecord> {
        let weights = selection_weights(&self.tiling);
        let index = area_weighted_index(&weights, &mut self.rng).ok_or_else(|| {
            AlgorithmError::InvalidIterationCount {
                value: self.history.len() as i64 + 1,
                reason: "canvas is fully divided into unit squares".to_string(),
            }
        })?;

        let orientation = choose_orientation(&mut self.rng);
        let record = match split(&mut self.tiling, index, orientation, &mut self.rng) {
            Err(AlgorithmError::DegenerateSplit { lo, hi }) => {
                tracing::trace!(index, lo, hi, ?orientation, "axis too short, using the other");
                split(&mut self.tiling, index, orientation.other(), &mut self.rng)?
            }
            result => result?,
        };

        tracing::trace!(
            iteration = self.history.len() + 1,
            index = record.index,
            orientation = ?record.orientation,
            break_point = record.break_point,
            "split applied"
        );
        self.history.push(record);
        Ok(record)
    }

    /// Run `iterations` splits, reporting each to `observer`
    ///
    /// The count is validated before any split, so a rejected call leaves
    /// the tiling untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIterationCount` if the count is rejected
    pub fn run<F>(&mut self, iterations: i64, mut observer: F) -> Result<()>
    where
        F: FnMut(&SplitRecord, &Tiling),
    {
        let count = self.validate_iterations(iterations)?;
        tracing::debug!(
            width = self.tiling.canvas_width(),
            height = self.tiling.canvas_height(),
            iterations = count,
            "starting subdivision"
        );

        for _ in 0..count {
            let record = self.execute_iteration()?;
            observer(&record, &self.tiling);
        }

        tracing::debug!(rectangles = self.tiling.len(), "subdivision finished");
        Ok(())
    }

    /// Hand the finished tiling to the caller
    pub fn finish(self) -> Tiling {
        self.tiling
    }

    /// Hand over the finished tiling together with the applied splits
    pub fn into_parts(self) -> (Tiling, Vec<SplitRecord>) {
        (self.tiling, self.history)
    }
}

/// Subdivide a canvas `iterations` times
///
/// # Errors
///
/// Returns `InvalidDimension` for a non-positive dimension and
/// `InvalidIterationCount` for a negative or oversized count. Nothing is
/// returned on error.
pub fn generate<R: Rng + ?Sized>(
    canvas_width: i64,
    canvas_height: i64,
    iterations: i64,
    rng: &mut R,
) -> Result<Tiling> {
    generate_with(canvas_width, canvas_height, iterations, rng, |_, _| {})
}

/// Subdivide a canvas, calling `observer` after every split
///
/// # Errors
///
/// See [`generate`]
pub fn generate_with<R, F>(
    canvas_width: i64,
    canvas_height: i64,
    iterations: i64,
    rng: &mut R,
    observer: F,
) -> Result<Tiling>
where
    R: Rng + ?Sized,
    F: FnMut(&SplitRecord, &Tiling),
{
    let mut engine = Subdivision::with_rng(canvas_width, canvas_height, rng)?;
    engine.run(iterations, observer)?;
    Ok(engine.finish())
}

/// Rebuild a tiling from a recorded split sequence
///
/// # Errors
///
/// Returns `InvalidDimension` for a bad canvas, `InvalidRectangleIndex` or
/// `DegenerateSplit` for a record that does not fit the tiling
pub fn replay(canvas_width: i64, canvas_height: i64, records: &[SplitRecord]) -> Result<Tiling> {
    let mut tiling = initialize(canvas_width, canvas_height)?;
    for record in records {
        apply_split(&mut tiling, record)?;
    }
    Ok(tiling)
}
