//! Populating matrices with test data.
//!
//! [`MatrixFill`] is the seam: the run uses a seeded [`UniformFill`], tests
//! can pass any `FnMut(row, col) -> f32` closure instead.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default generator seed, so runs are reproducible.
///
/// Reproducible within one build only: `StdRng`'s algorithm is not
/// guaranteed across `rand` releases, so a dependency bump may change the
/// generated matrices (and therefore C) for the same seed.
pub const SEED: u64 = 2397;

/// Exclusive upper bound of generated elements.
pub const MAX_VALUE: f32 = 100.0;

/// Something that can write every element of a matrix.
pub trait MatrixFill {
    /// Overwrite `matrix` in row-major order.
    fn fill(&mut self, matrix: &mut Matrix);
}

impl<F> MatrixFill for F
where
    F: FnMut(usize, usize) -> f32,
{
    fn fill(&mut self, matrix: &mut Matrix) {
        let cols = matrix.cols();
        for (i, row) in matrix.as_mut_slice().chunks_exact_mut(cols).enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self(i, j);
            }
        }
    }
}

/// Independent uniform samples in `[0, max_value)`.
///
/// Successive calls continue the same stream, so filling A then B from one
/// `UniformFill` gives different, but reproducible, contents.
#[derive(Debug, Clone)]
pub struct UniformFill<R> {
    rng: R,
    dist: Uniform<f32>,
}

impl UniformFill<StdRng> {
    /// `StdRng` seeded with `seed`, sampling `[0, max_value)`.
    pub fn seeded(seed: u64, max_value: f32) -> Result<Self> {
        Self::new(StdRng::seed_from_u64(seed), max_value)
    }
}

impl<R: Rng> UniformFill<R> {
    pub fn new(rng: R, max_value: f32) -> Result<Self> {
        if !(max_value.is_finite() && max_value > 0.0) {
            return Err(MatmulError::InvalidFillRange { max_value });
        }
        Ok(Self {
            rng,
            dist: Uniform::new(0.0, max_value),
        })
    }
}

impl<R: Rng> MatrixFill for UniformFill<R> {
    fn fill(&mut self, matrix: &mut Matrix) {
        for value in matrix.as_mut_slice() {
            *value = self.dist.sample(&mut self.rng);
        }
    }
}
