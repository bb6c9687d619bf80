use crate::{AlgebraError, Fraction, Matrix};
use alloc::sync::Arc;
use ark_std::vec::*;

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl Transpose for Matrix {
    /// `result[i][j] = self[j][i]`, with the shape swapped.
    fn transpose(&self) -> Self {
        let rows = (0..self.ncols()).map(|c| self.column(c)).collect();
        Matrix::from_rows_unchecked(self.ncols(), self.nrows(), rows)
    }
}

impl Matrix {
    /// Replaces `operating_row` with `operating_row + multiplier * operator_row`.
    ///
    /// Only the operating row is rebuilt; every other row of the result,
    /// `operator_row` included, is shared with `self` unchanged.
    pub fn row_operation(
        &self,
        operator_row: usize,
        operating_row: usize,
        multiplier: &Fraction,
    ) -> Result<Matrix, AlgebraError> {
        for row in [operator_row, operating_row] {
            if row >= self.nrows() {
                return Err(AlgebraError::IndexOutOfRange(row, self.nrows()));
            }
        }
        Ok(self.add_row_multiple(operator_row, operating_row, multiplier))
    }

    pub(crate) fn add_row_multiple(
        &self,
        operator_row: usize,
        operating_row: usize,
        multiplier: &Fraction,
    ) -> Matrix {
        let updated: Vec<Fraction> = self
            .row(operating_row)
            .iter()
            .zip(self.row(operator_row))
            .map(|(target, source)| target + &(source * multiplier))
            .collect();
        self.with_row(operating_row, Arc::from(updated))
    }
}
