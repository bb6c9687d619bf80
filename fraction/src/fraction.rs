use ark_std::{
    cmp::Ordering,
    fmt,
    iter::{Product, Sum},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::FractionError;

/// An exact rational number `numerator / denominator`.
///
/// Every constructor leaves the value in canonical form:
/// - `denominator > 0`, the sign lives in the numerator;
/// - `gcd(|numerator|, denominator) == 1`, zero is stored as `0/1`.
///
/// Because the representation is unique, the derived `PartialEq` and `Hash`
/// agree with equality of the rational values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(BigInt, BigInt)", into = "(BigInt, BigInt)")]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Creates the canonical fraction equal to `numerator / denominator`.
    ///
    /// Fails with [`FractionError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, FractionError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Creates the fraction `n/1`.
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    /// Creates the fraction equal to `dividend / divisor`.
    ///
    /// The parts are combined cross-wise, `(a.num * b.den) / (a.den * b.num)`,
    /// then reduced. Fails with [`FractionError::DivisionByZero`] when `divisor`
    /// is zero.
    pub fn quotient(dividend: &Fraction, divisor: &Fraction) -> Result<Self, FractionError> {
        let numerator = &dividend.numerator * &divisor.denominator;
        let denominator = &dividend.denominator * &divisor.numerator;
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    // Divides out the gcd and moves the sign into the numerator.
    // `denominator` must be nonzero.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = numerator.gcd(&denominator);
        let mut numerator = numerator / &divisor;
        let mut denominator = denominator / &divisor;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns `1 / self`, failing if `self` is zero.
    pub fn recip(&self) -> Result<Self, FractionError> {
        Self::quotient(&Self::one(), self)
    }

    pub fn checked_div(&self, divisor: &Fraction) -> Result<Self, FractionError> {
        Self::quotient(self, divisor)
    }

    fn add_ref(&self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Self::reduced(
                &self.numerator + &rhs.numerator,
                self.denominator.clone(),
            );
        }
        Self::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn sub_ref(&self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Self::reduced(
                &self.numerator - &rhs.numerator,
                self.denominator.clone(),
            );
        }
        Self::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn mul_ref(&self, rhs: &Fraction) -> Fraction {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                self.$inner(rhs)
            }
        }

        impl $trait<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                self.$inner(&rhs)
            }
        }

        impl $trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                self.$inner(rhs)
            }
        }

        impl $trait<Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                self.$inner(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_ref);
impl_binary_op!(Sub, sub, sub_ref);
impl_binary_op!(Mul, mul, mul_ref);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, x| acc + x)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, x| acc * x)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(BigInt, BigInt)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (BigInt, BigInt)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for (BigInt, BigInt) {
    fn from(f: Fraction) -> Self {
        f.into_parts()
    }
}

/// Integers render without a slash: `3`, `-1/2`, `7/3`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses `"n"` or `"n/d"`, the forms produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            BigInt::from_str(part.trim()).map_err(|_| FractionError::InvalidLiteral)
        };
        match s.split_once('/') {
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}
