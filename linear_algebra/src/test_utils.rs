use crate::{Fraction, Matrix};
use ark_std::vec::*;

pub(crate) fn f(n: i64) -> Fraction {
    Fraction::from(n)
}

pub(crate) fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap()
}

pub(crate) fn int_matrix(rows: &[&[i64]]) -> Matrix {
    rows.iter()
        .map(|row| row.iter().copied().map(f).collect::<Vec<_>>())
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}
