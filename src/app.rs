//! One benchmark run: allocate, fill, (print), time the multiply, report.

use crate::dims::Dims;
use crate::error::Result;
use crate::fill::{MAX_VALUE, MatrixFill, SEED, UniformFill};
use crate::matrix::Matrix;
use crate::report;
use crate::timing::{Elapsed, timed};
use log::{debug, info};
use std::io::Write;

/// Knobs for [`run`]. The default reproduces the reference run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u64,
    pub max_value: f32,
    /// Print A, B and C.
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: SEED,
            max_value: MAX_VALUE,
            debug: false,
        }
    }
}

/// Matrices and timing of a finished run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
    pub elapsed: Elapsed,
}

/// Run with a seeded uniform fill built from `config`.
pub fn run<W: Write>(dims: Dims, config: &RunConfig, out: &mut W) -> Result<RunOutcome> {
    let mut fill = UniformFill::seeded(config.seed, config.max_value)?;
    run_with_fill(dims, config.debug, &mut fill, out)
}

/// Run with a caller-supplied fill. A is filled before B.
pub fn run_with_fill<W, F>(dims: Dims, debug: bool, fill: &mut F, out: &mut W) -> Result<RunOutcome>
where
    W: Write,
    F: MatrixFill + ?Sized,
{
    debug!("dims: {}", dims);

    let (l, m) = dims.a_shape();
    let (_, n) = dims.b_shape();
    let mut a = Matrix::zeros(l, m)?;
    let mut b = Matrix::zeros(m, n)?;
    let mut c = Matrix::zeros(l, n)?;
    debug!("allocated A {}x{}, B {}x{}, C {}x{}", l, m, m, n, l, n);

    fill.fill(&mut a);
    fill.fill(&mut b);

    if debug {
        report::write_labeled(out, "A", &a)?;
        writeln!(out)?;
        report::write_labeled(out, "B", &b)?;
        writeln!(out)?;
    }

    let (result, elapsed) = timed(|| crate::multiply_into(&a, &b, &mut c));
    result?;
    info!(
        "multiplied {} in {} us ({:.3} GFLOPS)",
        dims,
        elapsed.as_micros(),
        gflops(dims, elapsed)
    );

    if debug {
        report::write_labeled(out, "C", &c)?;
    }

    writeln!(out)?;
    report::write_elapsed(out, elapsed)?;
    out.flush()?;

    Ok(RunOutcome { a, b, c, elapsed })
}

fn gflops(dims: Dims, elapsed: Elapsed) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { dims.flops() / secs / 1e9 } else { 0.0 }
}
