//! Error types and context management for subdivision and rendering

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Canvas width or height outside the accepted range
    InvalidDimension {
        /// Which dimension was rejected (`"width"` or `"height"`)
        parameter: &'static str,
        /// Provided value
        value: i64,
    },

    /// Iteration count cannot be honoured for the canvas
    InvalidIterationCount {
        /// Provided value
        value: i64,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A break point would collapse one side of a split to zero width
    ///
    /// Raised only inside the engine and recovered there by choosing the
    /// other axis; callers of `generate` never observe it.
    DegenerateSplit {
        /// Lower bound of the axis being split
        lo: i64,
        /// Upper bound of the axis being split
        hi: i64,
    },

    /// Rendering or palette parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color count differs from rectangle count
    PaletteMismatch {
        /// Number of colors supplied
        colors: usize,
        /// Number of rectangles in the tiling
        rectangles: usize,
    },

    /// Rectangle index exceeds the tiling
    InvalidRectangleIndex {
        /// The invalid index
        index: usize,
        /// Number of rectangles present
        len: usize,
    },

    /// A tiling invariant does not hold
    TilingViolation {
        /// Description of the broken invariant
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(
                    f,
                    "Invalid canvas {parameter} {value}: must lie in 1..={MAX_CANVAS_DIMENSION}"
                )
            }
            Self::InvalidIterationCount { value, reason } => {
                write!(f, "Invalid iteration count {value}: {reason}")
            }
            Self::DegenerateSplit { lo, hi } => {
                write!(f, "Span [{lo}, {hi}] is too narrow to split")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PaletteMismatch { colors, rectangles } => {
                write!(
                    f,
                    "Palette has {colors} colors but the tiling has {rectangles} rectangles"
                )
            }
            Self::InvalidRectangleIndex { index, len } => {
                write!(f, "Rectangle index {index} is out of bounds (len: {len})")
            }
            Self::TilingViolation { reason } => {
                write!(f, "Tiling invariant violated: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tiling violation error
pub fn tiling_violation(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::TilingViolation {
        reason: reason.to_string(),
    }
}

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn ensure_parent_dir(output_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
