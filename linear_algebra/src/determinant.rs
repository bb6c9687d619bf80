use crate::{AlgebraError, Fraction, Matrix};
use num_traits::{One, Zero};
use tracing::{debug, trace};

impl Matrix {
    /// First row strictly below `pivot_row` with a nonzero entry in `col`.
    pub fn find_usable_row(&self, pivot_row: usize, col: usize) -> Option<usize> {
        (pivot_row + 1..self.nrows()).find(|&row| !self.get(row, col).numerator().is_zero())
    }

    /// Reduces `self` to upper-triangular form using only
    /// `row += multiplier * other_row` operations, which leave the
    /// determinant unchanged.
    ///
    /// Columns are processed left to right with the pivot on the diagonal.
    /// A zero pivot is repaired by adding the first usable row below it. If
    /// there is none the column is left as is; its zero pivot already makes
    /// the diagonal product zero.
    pub fn upper_triangular(&self) -> Result<Matrix, AlgebraError> {
        let mut working = self.clone();
        for col in 0..self.nrows().min(self.ncols()) {
            if working.get(col, col).is_zero() {
                match working.find_usable_row(col, col) {
                    Some(usable) => {
                        debug!(pivot = col, usable, "repairing zero pivot");
                        working = working.add_row_multiple(usable, col, &Fraction::one());
                    }
                    None => {
                        debug!(pivot = col, "no usable row, column is singular");
                        continue;
                    }
                }
            }
            working = working.eliminate_below(col)?;
        }
        Ok(working)
    }

    // Zeroes column `pivot` in every row below the (nonzero) pivot entry.
    fn eliminate_below(&self, pivot: usize) -> Result<Matrix, AlgebraError> {
        let pivot_value = self.get(pivot, pivot).clone();
        let mut working = self.clone();
        for row in pivot + 1..self.nrows() {
            let entry = working.get(row, pivot);
            if entry.is_zero() {
                continue;
            }
            let multiplier = -Fraction::quotient(entry, &pivot_value)?;
            working = working.add_row_multiple(pivot, row, &multiplier);
        }
        Ok(working)
    }

    /// Determinant by triangularization: the product of the diagonal of
    /// [`Matrix::upper_triangular`].
    ///
    /// The empty matrix has determinant one.
    pub fn determinant(&self) -> Result<Fraction, AlgebraError> {
        self.ensure_square()?;
        let triangular = self.upper_triangular()?;
        let det: Fraction = (0..self.nrows()).map(|i| triangular.get(i, i)).product();
        trace!(size = self.nrows(), %det, "elimination determinant");
        Ok(det)
    }

    /// Determinant by cofactor expansion along the first column.
    ///
    /// Takes factorial time. It is an independent check on
    /// [`Matrix::determinant`], not meant for large inputs.
    pub fn cofactor_determinant(&self) -> Result<Fraction, AlgebraError> {
        self.ensure_square()?;
        let det = self.cofactor_expansion();
        trace!(size = self.nrows(), %det, "cofactor determinant");
        Ok(det)
    }

    fn cofactor_expansion(&self) -> Fraction {
        match self.nrows() {
            0 => Fraction::one(),
            1 => self.get(0, 0).clone(),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            n => (0..n)
                .map(|row| {
                    let term = self.get(row, 0) * self.minor_unchecked(row, 0).cofactor_expansion();
                    if row % 2 == 0 {
                        term
                    } else {
                        -term
                    }
                })
                .sum(),
        }
    }
}
