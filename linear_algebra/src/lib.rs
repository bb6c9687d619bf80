#![cfg_attr(not(feature = "std"), no_std)]
//! Exact linear algebra over [`Fraction`] matrices.

#[macro_use]
extern crate ark_std;
extern crate alloc;

mod determinant;
mod error;
mod inverse;
pub mod matrix;
pub mod ops;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;

pub use error::AlgebraError;
pub use exact_fractions::{Fraction, FractionError};
pub use matrix::Matrix;
pub use ops::Transpose;
