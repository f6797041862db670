//! Serial dense matrix multiplication, kept simple on purpose.
//!
//! This is the baseline the threaded and distributed variants get measured
//! against: a plain i-j-k triple loop over row-major `f32` buffers, timed at
//! microsecond resolution.
//!
//! ## Usage
//!
//! ```
//! use mm_mult::{Matrix, multiply};
//!
//! let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let b = Matrix::identity(3).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! Every output cell depends on one row of A and one column of B only, so
//! splitting the output by rows, columns or blocks needs no synchronization
//! beyond joining at the end. That is how the parallel variants are built.
//!
//! ## What's inside
//!
//! - [`Matrix`]: owned row-major buffer, fallible allocation
//! - [`matrix::naive_ijk`]: the kernel on raw slices
//! - [`fill`]: seeded uniform test data
//! - [`app::run`]: the full timed run the `mm_mult_serial` binary performs

pub mod app;
pub mod dims;
pub mod error;
pub mod fill;
pub mod matrix;
pub mod report;
pub mod timing;

pub use dims::Dims;
pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;

/// Matrix multiply: C = A * B
///
/// A is l×m, B is m×n, the returned C is l×n.
///
/// # Errors
///
/// `ShapeMismatch` if `A.cols != B.rows` (checked before anything is
/// allocated), `AllocationFailure` if C's buffer can't be obtained.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_inner(a, b)?;
    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), a.rows(), a.cols(), b.cols());
    Ok(c)
}

/// Same as [`multiply`] but writes into an existing C, overwriting it.
///
/// # Errors
///
/// `ShapeMismatch` if `A.cols != B.rows` or C isn't `A.rows × B.cols`.
/// C is left untouched on error.
pub fn multiply_into(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    check_inner(a, b)?;
    let expected = (a.rows(), b.cols());
    if c.shape() != expected {
        return Err(MatmulError::ShapeMismatch {
            operation: "multiply_into output",
            left: expected,
            right: c.shape(),
        });
    }

    let (l, m, n) = (a.rows(), a.cols(), b.cols());
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), l, m, n);
    Ok(())
}

fn check_inner(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatmulError::ShapeMismatch {
            operation: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}
