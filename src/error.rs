//! Error types for matrix allocation, validation and the run report.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatmulError>;

/// Everything that can stop a multiplication run.
#[derive(Error, Debug)]
pub enum MatmulError {
    /// Wrong number of positional dimensions (only 1 or 3 are accepted).
    #[error("usage:  mm_mult_serial [l_dimension] <m_dimension n_dimension>")]
    InvalidArgumentCount { got: usize },

    /// A dimension that is not a positive integer.
    #[error("Error: number of rows and/or columns must be greater than 0 ({name}={value:?})")]
    InvalidDimension { name: &'static str, value: String },

    /// `rows * cols` does not fit in `usize`.
    #[error("Error: a {rows}x{cols} matrix has more elements than can be addressed")]
    DimensionOverflow { rows: usize, cols: usize },

    /// The backing buffer could not be reserved.
    #[error("ERROR:  Insufficient Memory for a {rows}x{cols} matrix")]
    AllocationFailure { rows: usize, cols: usize },

    #[error("Error: shape mismatch in {operation}: {left:?} vs {right:?}")]
    ShapeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Error: a {rows}x{cols} matrix needs {} elements, got {len}", rows.saturating_mul(*cols))]
    BufferLength { rows: usize, cols: usize, len: usize },

    #[error("Error: fill range upper bound must be finite and positive, got {max_value}")]
    InvalidFillRange { max_value: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
