/// Matrix multiplication using i-j-k loop order: C = A * B.
///
/// This is the textbook triple loop. Each output cell is summed in a local
/// accumulator and stored once, so C never holds a partial sum and its
/// previous contents are irrelevant. Output and A are walked row-major;
/// the inner loop strides through B by `n`, which is the cache cost this
/// baseline accepts.
///
/// The summation order (k ascending, starting from 0.0) is fixed, so the
/// result is bit-for-bit reproducible for the same inputs.
///
/// Dimensions are assumed to be positive. Use [`crate::multiply`] for a
/// shape-checked call that returns an error instead of panicking.
///
/// # Arguments
///
/// * `a` - Matrix A (l × m), row-major
/// * `b` - Matrix B (m × n), row-major
/// * `c` - Matrix C (l × n), row-major, overwritten
/// * `l` - Rows of A and C
/// * `m` - Columns of A, rows of B
/// * `n` - Columns of B and C
///
/// # Panics
///
/// Panics if the slice sizes don't match l, m, n.
///
/// # Example
///
/// ```
/// use mm_mult::matrix::naive_ijk::matmul_naive_ijk;
///
/// let a = vec![1.0, 2.0, 3.0,    // 2×3
///              4.0, 5.0, 6.0];
/// let b = vec![7.0, 8.0,         // 3×2
///              9.0, 10.0,
///              11.0, 12.0];
/// let mut c = vec![f32::NAN; 4]; // overwritten, not accumulated
///
/// matmul_naive_ijk(&a, &b, &mut c, 2, 3, 2);
///
/// assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn matmul_naive_ijk(a: &[f32], b: &[f32], c: &mut [f32], l: usize, m: usize, n: usize) {
    assert_eq!(a.len(), l * m, "A: expected {}x{}={} elements", l, m, l * m);
    assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);
    assert_eq!(c.len(), l * n, "C: expected {}x{}={} elements", l, n, l * n);

    for (a_row, c_row) in a.chunks_exact(m).zip(c.chunks_exact_mut(n)) {
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let mut dot_prod = 0.0f32;
            for (k, &a_ik) in a_row.iter().enumerate() {
                dot_prod += a_ik * b[k * n + j];
            }
            *c_ij = dot_prod;
        }
    }
}
