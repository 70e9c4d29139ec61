//! Number predicates
//!
//! These assume an earlier `number` condition has already checked the kind.
//! A non-number candidate is simply rejected.

use super::{verdict, Predicate, Verdict};
use crate::value::Value;

/// Predicate that checks a number has no fractional part.
#[derive(Clone, Copy, Default, Debug)]
pub struct Integer;

impl Predicate for Integer {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(
            value
                .as_number()
                .is_some_and(|n| n.is_finite() && n.fract() == 0.0),
        )
    }
}

/// Predicate on a number's remainder modulo 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    /// Remainder 0.
    Even,
    /// Remainder 1.
    Odd,
}

impl Predicate for Parity {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        let expected = match self {
            Parity::Even => 0.0,
            Parity::Odd => 1.0,
        };
        // rem_euclid keeps the remainder non-negative, so -3 is odd.
        verdict(
            value
                .as_number()
                .is_some_and(|n| n.rem_euclid(2.0) == expected),
        )
    }
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct LessThan(pub f64);

impl Predicate for LessThan {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(value.as_number().is_some_and(|n| n < self.0))
    }
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan(pub f64);

impl Predicate for GreaterThan {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(value.as_number().is_some_and(|n| n > self.0))
    }
}
