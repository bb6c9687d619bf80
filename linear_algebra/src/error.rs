use exact_fractions::FractionError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Fail due to operations on structures of unexpected differing lengths.
    #[error("Unexpected different lengths: {0} and {1}")]
    DifferentLengths(usize, usize),
    /// Operand shapes are incompatible for the named operation.
    #[error("Shape mismatch: cannot {op} {left:?} and {right:?} matrices")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A flat entry list does not fill the requested shape.
    #[error("Shape mismatch: expected {0} entries, {1} were supplied")]
    EntryCount(usize, usize),
    #[error("Shape mismatch: matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),
    #[error("Index {0} out of range for dimension of size {1}")]
    IndexOutOfRange(usize, usize),
    #[error(transparent)]
    DivisionByZero(#[from] FractionError),
    /// Inversion of a matrix whose determinant is zero.
    #[error("Division by zero: matrix is singular")]
    SingularMatrix,
}

impl AlgebraError {
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            Self::DifferentLengths(..)
                | Self::ShapeMismatch { .. }
                | Self::EntryCount(..)
                | Self::NotSquare(..)
        )
    }

    /// `SingularMatrix` is a division by zero raised by inversion.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero(_) | Self::SingularMatrix)
    }
}
