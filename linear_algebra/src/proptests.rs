//! Property-based tests for matrix algebra.

use ark_std::vec::*;
use num_traits::Zero;
use proptest::prelude::*;

use crate::{Fraction, Matrix, Transpose};

fn entry() -> impl Strategy<Value = Fraction> {
    prop_oneof![
        3 => (-9i64..10).prop_map(Fraction::from),
        1 => (-9i64..10, 1i64..6).prop_map(|(n, d)| Fraction::new(n, d).unwrap()),
    ]
}

fn matrix(nrows: usize, ncols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(entry(), nrows * ncols)
        .prop_map(move |entries| Matrix::from_entries(nrows, ncols, entries).unwrap())
}

fn square_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=5).prop_flat_map(|n| matrix(n, n))
}

fn square_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..=4).prop_flat_map(|n| (matrix(n, n), matrix(n, n)))
}

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| matrix(r, c))
}

proptest! {
    #[test]
    fn determinants_agree(m in square_matrix()) {
        prop_assert_eq!(m.cofactor_determinant().unwrap(), m.determinant().unwrap());
    }

    #[test]
    fn determinants_agree_with_zero_pivot(m in square_matrix(), col in 0usize..5) {
        // Clearing column `col` down to the diagonal forces the pivot repair path.
        let n = m.nrows();
        let col = col % n;
        let entries = (0..n * n)
            .map(|i| {
                let (r, c) = (i / n, i % n);
                if c == col && r <= col { Fraction::zero() } else { m.get(r, c).clone() }
            })
            .collect::<Vec<_>>();
        let m = Matrix::from_entries(n, n, entries).unwrap();
        prop_assert_eq!(m.cofactor_determinant().unwrap(), m.determinant().unwrap());
    }

    #[test]
    fn determinant_is_multiplicative((a, b) in square_pair()) {
        let product = a.try_mul(&b).unwrap();
        prop_assert_eq!(
            product.determinant().unwrap(),
            a.determinant().unwrap() * b.determinant().unwrap()
        );
    }

    #[test]
    fn inverse_is_two_sided(m in square_matrix()) {
        prop_assume!(!m.determinant().unwrap().is_zero());
        let inverse = m.inverse().unwrap();
        let id = Matrix::identity(m.nrows());
        prop_assert_eq!(m.try_mul(&inverse).unwrap(), id.clone());
        prop_assert_eq!(inverse.try_mul(&m).unwrap(), id);
    }

    #[test]
    fn transpose_is_involution(m in any_matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_reverses_product(
        (a, b) in (1usize..=4, 1usize..=4, 1usize..=4)
            .prop_flat_map(|(r, k, c)| (matrix(r, k), matrix(k, c)))
    ) {
        prop_assert_eq!(
            a.try_mul(&b).unwrap().transpose(),
            b.transpose().try_mul(&a.transpose()).unwrap()
        );
    }

    #[test]
    fn scale_distributes_over_add(
        (a, b) in (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c))),
        k in entry(),
    ) {
        prop_assert_eq!(
            a.try_add(&b).unwrap().scale(&k),
            a.scale(&k).try_add(&b.scale(&k)).unwrap()
        );
    }

    #[test]
    fn row_operation_preserves_determinant(
        m in (2usize..=4).prop_flat_map(|n| matrix(n, n)),
        operator in 0usize..4,
        operating in 0usize..4,
        k in entry(),
    ) {
        let n = m.nrows();
        let (operator, operating) = (operator % n, operating % n);
        prop_assume!(operator != operating);
        let result = m.row_operation(operator, operating, &k).unwrap();
        prop_assert_eq!(result.row(operator), m.row(operator));
        prop_assert_eq!(result.determinant().unwrap(), m.determinant().unwrap());
    }
}

#[test]
fn random_matrices_agree() {
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for n in 2..=6 {
        let m = Matrix::rand(&mut rng, n, n, 10);
        assert_eq!(m.cofactor_determinant().unwrap(), m.determinant().unwrap());
    }
}
