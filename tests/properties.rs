//! Property-based tests using proptest.
//!
//! Algebraic identities of the product that hold regardless of loop order.

use mm_mult::{Matrix, multiply};
use proptest::prelude::*;

// Real-valued entries; compared against an error bound scaled by the
// magnitudes that went into each sum.
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f32..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Small integers, so every product and partial sum is exact in f32.
fn integer_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-8i32..=8, rows * cols).prop_map(move |data| {
        let data = data.into_iter().map(|v| v as f32).collect();
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

fn dims_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..8, 1usize..8, 1usize..8)
}

fn operands_strategy() -> impl Strategy<Value = (Matrix, Matrix)> {
    dims_strategy().prop_flat_map(|(l, m, n)| (matrix_strategy(l, m), matrix_strategy(m, n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn product_matches_definition((a, b) in operands_strategy()) {
        let c = multiply(&a, &b).unwrap();
        let (l, m, n) = (a.rows(), a.cols(), b.cols());
        prop_assert_eq!(c.shape(), (l, n));

        for i in 0..l {
            for j in 0..n {
                let mut exact = 0.0f64;
                let mut magnitude = 0.0f64;
                for k in 0..m {
                    let term = f64::from(a[(i, k)]) * f64::from(b[(k, j)]);
                    exact += term;
                    magnitude += term.abs();
                }
                let err = (f64::from(c[(i, j)]) - exact).abs();
                prop_assert!(err <= 1e-5 * magnitude + 1e-6, "({}, {}): {} vs {}", i, j, c[(i, j)], exact);
            }
        }
    }

    #[test]
    fn identity_on_the_right_is_a_no_op(a in dims_strategy().prop_flat_map(|(l, m, _)| matrix_strategy(l, m))) {
        let id = Matrix::identity(a.cols()).unwrap();
        prop_assert_eq!(multiply(&a, &id).unwrap(), a);
    }

    #[test]
    fn identity_on_the_left_is_a_no_op(a in dims_strategy().prop_flat_map(|(l, m, _)| matrix_strategy(l, m))) {
        let id = Matrix::identity(a.rows()).unwrap();
        prop_assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn zero_matrix_annihilates((a, n) in dims_strategy().prop_flat_map(|(l, m, n)| (matrix_strategy(l, m), Just(n)))) {
        let zero = Matrix::zeros(a.cols(), n).unwrap();
        let c = multiply(&a, &zero).unwrap();
        prop_assert_eq!(c.shape(), (a.rows(), n));
        prop_assert!(c.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn product_is_associative(
        (a, b, c) in (1usize..6, 1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(p, q, r, s)| {
            (integer_matrix_strategy(p, q), integer_matrix_strategy(q, r), integer_matrix_strategy(r, s))
        })
    ) {
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn mismatched_inner_dimension_is_rejected(
        (a, b) in (1usize..6, 1usize..6, 1usize..6, 1usize..6)
            .prop_filter("inner dims must differ", |(_, m, k, _)| m != k)
            .prop_flat_map(|(l, m, k, n)| (matrix_strategy(l, m), matrix_strategy(k, n)))
    ) {
        prop_assert!(multiply(&a, &b).is_err());
    }
}
