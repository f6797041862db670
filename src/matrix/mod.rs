//! Row-major `f32` matrices and the naive kernels that operate on them.
//!
//! [`Matrix`] owns a single contiguous buffer: element (i, j) lives at
//! offset `i * cols + j`. The kernels in the submodules work on the raw
//! slices so they can be reused by callers that manage their own buffers.

pub mod naive_ijk;

use crate::error::{MatmulError, Result};
use log::trace;
use std::ops::{Index, IndexMut};

/// Number of elements in a `rows × cols` matrix, or `DimensionOverflow`.
pub fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatmulError::DimensionOverflow { rows, cols })
}

/// Dense row-major matrix of single-precision values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Allocate a zero-filled `rows × cols` matrix.
    ///
    /// The buffer is reserved fallibly, so running out of memory comes back
    /// as [`MatmulError::AllocationFailure`] instead of aborting.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if either dimension is 0, `DimensionOverflow` if
    /// `rows * cols` overflows, `AllocationFailure` if the reservation fails.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatmulError::AllocationFailure { rows, cols })?;
        data.resize(len, 0.0);

        trace!("allocated {}x{} matrix ({} bytes)", rows, cols, len * size_of::<f32>());
        Ok(Self { rows, cols, data })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// ```
    /// use mm_mult::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0,
    ///                                     4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatmulError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every element in
    /// row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut matrix = Self::zeros(rows, cols)?;
        for (i, row) in matrix.data.chunks_exact_mut(cols).enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = f(i, j);
            }
        }
        Ok(matrix)
    }

    /// `size × size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f32] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.cols)
    }

    /// Bounds-checked element read.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        self.offset(i, j).map(|idx| self.data[idx])
    }

    /// Bounds-checked element write access.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f32> {
        self.offset(i, j).map(move |idx| &mut self.data[idx])
    }

    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.rows && j < self.cols).then(|| i * self.cols + j)
    }
}

/// `m[(i, j)]` indexing.
///
/// # Panics
///
/// Panics if `(i, j)` is outside the matrix. Use [`Matrix::get`] for a
/// checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        match self.offset(i, j) {
            Some(idx) => &self.data[idx],
            None => panic!("index ({}, {}) out of range for {}x{} matrix", i, j, self.rows, self.cols),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        match self.offset(i, j) {
            Some(idx) => &mut self.data[idx],
            None => panic!("index ({}, {}) out of range for {}x{} matrix", i, j, self.rows, self.cols),
        }
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 {
        return Err(MatmulError::InvalidDimension {
            name: "rows",
            value: rows.to_string(),
        });
    }
    if cols == 0 {
        return Err(MatmulError::InvalidDimension {
            name: "cols",
            value: cols.to_string(),
        });
    }
    element_count(rows, cols)
}
