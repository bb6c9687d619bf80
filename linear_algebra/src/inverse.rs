use crate::{AlgebraError, Fraction, Matrix, Transpose};
use ark_std::vec::*;
use num_traits::Zero;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Matrix {
    /// Inverse by the adjugate method: `adj(A) / det(A)`.
    ///
    /// Fails with [`AlgebraError::NotSquare`] for non-square input and with
    /// [`AlgebraError::SingularMatrix`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix, AlgebraError> {
        self.ensure_square()?;
        let det = self.determinant()?;
        if det.is_zero() {
            debug!(size = self.nrows(), "cannot invert singular matrix");
            return Err(AlgebraError::SingularMatrix);
        }
        Ok(self.adjugate()?.scale(&det.recip()?))
    }

    /// Transpose of the cofactor matrix. Minors use the elimination determinant.
    pub fn adjugate(&self) -> Result<Matrix, AlgebraError> {
        self.ensure_square()?;
        let n = self.nrows();
        let cofactors = cfg_into_iter!(0..n * n)
            .map(|idx| -> Result<Fraction, AlgebraError> {
                let (row, col) = (idx / n, idx % n);
                let minor = self.minor_unchecked(row, col).determinant()?;
                Ok(if (row + col) % 2 == 1 { -minor } else { minor })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_entries(n, n, cofactors)?.transpose())
    }
}
