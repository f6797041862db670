//! Console output: matrix dumps and the elapsed-time line.
//!
//! Numbers follow C's `%g` rules (what an iostream prints by default):
//! `precision` significant digits, trailing zeros dropped, scientific
//! notation for very small or very large exponents.

use crate::matrix::Matrix;
use crate::timing::Elapsed;
use std::io::{self, Write};

/// Significant digits used for matrix elements.
pub const ELEMENT_PRECISION: usize = 6;

/// Significant digits used for the elapsed time.
pub const TIME_PRECISION: usize = 8;

/// Format `value` like `printf("%.{precision}g")`.
///
/// ```
/// use mm_mult::report::format_general;
///
/// assert_eq!(format_general(58.0, 6), "58");
/// assert_eq!(format_general(0.001234, 8), "0.001234");
/// assert_eq!(format_general(0.000001, 8), "1e-06");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent %g decides on is the one after rounding to `precision`
    // digits, which is exactly what `{:e}` produces.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// One line per row, every value followed by a single space.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.iter_rows() {
        for &value in row {
            write!(out, "{} ", format_general(f64::from(value), ELEMENT_PRECISION))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// `<name> matrix =` header followed by the rows.
pub fn write_labeled<W: Write>(out: &mut W, name: &str, matrix: &Matrix) -> io::Result<()> {
    writeln!(out, "{} matrix =", name)?;
    write_matrix(out, matrix)
}

/// `time=<seconds> seconds`
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Elapsed) -> io::Result<()> {
    writeln!(
        out,
        "time={} seconds",
        format_general(elapsed.as_secs_f64(), TIME_PRECISION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_matches_printf() {
        let cases = [
            (1.0, 6, "1"),
            (0.5, 6, "0.5"),
            (99.99999, 6, "100"),
            (52.345678, 6, "52.3457"),
            (123456.0, 6, "123456"),
            (1234567.0, 6, "1.23457e+06"),
            (0.0001, 6, "0.0001"),
            (0.00001, 6, "1e-05"),
            (0.123456789, 8, "0.12345679"),
            (12.0, 8, "12"),
            (-2.5, 6, "-2.5"),
            (1e100, 6, "1e+100"),
        ];
        for (value, precision, expected) in cases {
            assert_eq!(format_general(value, precision), expected, "{}", value);
        }
    }

    #[test]
    fn special_values() {
        assert_eq!(format_general(0.0, 8), "0");
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn matrix_rows_are_space_terminated() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.5, 3.0, 40.0]).unwrap();
        let mut out = Vec::new();
        write_labeled(&mut out, "C", &m).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "C matrix =\n1 2.5 \n3 40 \n");
    }

    #[test]
    fn elapsed_line() {
        let mut out = Vec::new();
        write_elapsed(&mut out, Elapsed::from_micros(1_234_567)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "time=1.234567 seconds\n");

        let mut out = Vec::new();
        write_elapsed(&mut out, Elapsed::from_micros(0)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "time=0 seconds\n");
    }
}
