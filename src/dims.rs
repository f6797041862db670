//! Dimension triple (l, m, n) and validation of the positional arguments.

use crate::error::{MatmulError, Result};
use crate::matrix::element_count;
use std::fmt;

/// Shapes of one run: A is l×m, B is m×n, C is l×n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub l: usize,
    pub m: usize,
    pub n: usize,
}

impl Dims {
    /// Build a triple, rejecting zero dimensions and element counts that
    /// overflow `usize`.
    pub fn new(l: usize, m: usize, n: usize) -> Result<Self> {
        for (name, value) in [("l", l), ("m", m), ("n", n)] {
            if value == 0 {
                return Err(MatmulError::InvalidDimension {
                    name,
                    value: value.to_string(),
                });
            }
        }
        element_count(l, m)?;
        element_count(m, n)?;
        element_count(l, n)?;
        Ok(Self { l, m, n })
    }

    /// Square case: l = m = n = `d`.
    pub fn square(d: usize) -> Result<Self> {
        Self::new(d, d, d)
    }

    /// Parse the positional arguments: either `[d]` or `[l, m, n]`.
    ///
    /// The count is checked before any value is looked at, so a wrong count
    /// always reports usage.
    ///
    /// ```
    /// use mm_mult::Dims;
    ///
    /// let dims = Dims::from_args(&["2", "3", "4"]).unwrap();
    /// assert_eq!((dims.l, dims.m, dims.n), (2, 3, 4));
    /// assert_eq!(Dims::from_args(&["5"]).unwrap(), Dims::square(5).unwrap());
    /// assert!(Dims::from_args(&["2", "3"]).is_err());
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [d] => Self::square(parse_dim("d", d.as_ref())?),
            [l, m, n] => Self::new(
                parse_dim("l", l.as_ref())?,
                parse_dim("m", m.as_ref())?,
                parse_dim("n", n.as_ref())?,
            ),
            _ => Err(MatmulError::InvalidArgumentCount { got: args.len() }),
        }
    }

    /// `(rows, cols)` of A.
    pub fn a_shape(&self) -> (usize, usize) {
        (self.l, self.m)
    }

    /// `(rows, cols)` of B.
    pub fn b_shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// `(rows, cols)` of C.
    pub fn c_shape(&self) -> (usize, usize) {
        (self.l, self.n)
    }

    /// Multiply-add count of one product, as `f64` so large triples
    /// don't overflow.
    pub fn flops(&self) -> f64 {
        2.0 * self.l as f64 * self.m as f64 * self.n as f64
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l={} m={} n={}", self.l, self.m, self.n)
    }
}

/// Parse one dimension. Signed parse so `-3` is reported as a
/// non-positive dimension rather than as garbage.
fn parse_dim(name: &'static str, raw: &str) -> Result<usize> {
    let invalid = || MatmulError::InvalidDimension {
        name,
        value: raw.to_string(),
    };

    let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }
    usize::try_from(value).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_square() {
        let dims = Dims::from_args(&["3"]).unwrap();
        assert_eq!(dims, Dims { l: 3, m: 3, n: 3 });
    }

    #[test]
    fn three_arguments_in_order() {
        let dims = Dims::from_args(&["2", "3", "4"]).unwrap();
        assert_eq!(dims.a_shape(), (2, 3));
        assert_eq!(dims.b_shape(), (3, 4));
        assert_eq!(dims.c_shape(), (2, 4));
    }

    #[test]
    fn wrong_counts_are_usage_errors() {
        let cases: [&[&str]; 3] = [&[], &["2", "3"], &["1", "2", "3", "4"]];
        for args in cases {
            assert!(matches!(
                Dims::from_args(args),
                Err(MatmulError::InvalidArgumentCount { got }) if got == args.len()
            ));
        }
    }

    #[test]
    fn non_positive_and_garbage_are_rejected() {
        for bad in ["0", "-4", "abc", "", "3.5"] {
            assert!(
                matches!(Dims::from_args(&[bad]), Err(MatmulError::InvalidDimension { .. })),
                "{:?} should be rejected",
                bad
            );
        }

        let err = Dims::from_args(&["2", "0", "4"]).unwrap_err();
        assert!(matches!(err, MatmulError::InvalidDimension { name: "m", .. }));
    }

    #[test]
    fn overflowing_sizes_are_rejected() {
        let err = Dims::new(usize::MAX, 2, 1).unwrap_err();
        assert!(matches!(err, MatmulError::DimensionOverflow { .. }));
    }

    #[test]
    fn flops_counts_multiply_and_add() {
        assert_eq!(Dims::new(2, 3, 4).unwrap().flops(), 48.0);
    }
}
