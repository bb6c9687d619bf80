//! Property-based tests for fraction arithmetic.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use crate::Fraction;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn is_canonical(f: &Fraction) -> bool {
    f.denominator().is_positive() && f.numerator().gcd(f.denominator()).is_one()
}

proptest! {
    #[test]
    fn constructed_fractions_are_canonical(n in small_int(), d in non_zero_int()) {
        let f = Fraction::new(n, d).unwrap();
        prop_assert!(is_canonical(&f));
        // Same value as the unreduced pair.
        prop_assert_eq!(f.numerator() * BigInt::from(d), BigInt::from(n) * f.denominator());
    }

    #[test]
    fn arithmetic_results_are_canonical(a in fraction(), b in fraction()) {
        prop_assert!(is_canonical(&(&a + &b)));
        prop_assert!(is_canonical(&(&a - &b)));
        prop_assert!(is_canonical(&(&a * &b)));
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn distributive(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn sub_is_add_neg(a in fraction(), b in fraction()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn quotient_inverts_multiply(a in fraction(), b in fraction()) {
        prop_assume!(!b.is_zero());
        let q = Fraction::quotient(&a, &b).unwrap();
        prop_assert!(is_canonical(&q));
        prop_assert_eq!(q * b, a);
    }

    #[test]
    fn order_matches_difference_sign(a in fraction(), b in fraction()) {
        prop_assert_eq!(a < b, (&a - &b).is_negative());
    }

    #[test]
    fn display_parses_back(a in fraction()) {
        prop_assert_eq!(a.to_string().parse::<Fraction>().unwrap(), a);
    }
}
