#![cfg_attr(not(feature = "std"), no_std)]
//! Exact rational numbers over arbitrary-precision integers.
//!
//! A [`Fraction`] is always kept in canonical form: the denominator is
//! strictly positive and shares no factor with the numerator.

pub use error::FractionError;
pub use fraction::Fraction;

mod error;
mod fraction;
mod serialize;

#[cfg(test)]
mod proptests;

