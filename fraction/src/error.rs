use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// A fraction was constructed or derived with a zero denominator.
    #[error("Division by zero: denominator must be nonzero")]
    DivisionByZero,
    #[error("Invalid fraction literal")]
    InvalidLiteral,
}
