//! Predicates: the checkable unit behind every condition
//!
//! A [`Predicate`] inspects a [`Value`] and returns a [`Verdict`]. Plain
//! closures `Fn(&Value) -> bool` are predicates, which is how host code adds
//! its own checks. The built-in predicates fall into three groups:
//!
//! - primitive and refinement checks ([`IsKind`], [`Integer`], [`Parity`],
//!   [`LessThan`], [`GreaterThan`], [`Matches`], [`Length`], [`Equals`])
//! - structural checks that recurse into other validators ([`ShapeCheck`],
//!   [`EachKey`], [`EachValue`])
//! - logical combinators ([`Optional`], [`Either`], [`IsNot`])
//!
//! Structural checks and combinators never let a nested failure escape:
//! they turn it into a [`Rejection`] that carries the nested error.
//!
//! # Example
//!
//! ```rust
//! use waterline::predicate::{Predicate, LessThan};
//! use waterline::Value;
//!
//! let below_ten = LessThan(10.0);
//! assert!(below_ten.check(&Value::from(3)).is_ok());
//! assert!(below_ten.check(&Value::from(12)).is_err());
//!
//! let short = |v: &Value| v.as_str().is_some_and(|s| s.len() < 4);
//! assert!(short.check(&Value::from("abc")).is_ok());
//! ```

mod basic;
mod combinators;
mod number;
mod string;
mod structure;

use crate::error::Rejection;
use crate::value::Value;

pub use basic::{Equals, IsKind};
pub use combinators::{Either, IsNot, Optional};
pub use number::{GreaterThan, Integer, LessThan, Parity};
pub use string::{Length, LengthMode, Matches};
pub use structure::{EachKey, EachValue, Shape, ShapeCheck};

/// Outcome of a single predicate.
pub type Verdict = Result<(), Rejection>;

/// A check over candidate values.
///
/// Implementations must be pure: the same value always yields the same
/// verdict, and checking never mutates shared state.
pub trait Predicate: Send + Sync {
    /// Check the value.
    fn check(&self, value: &Value) -> Verdict;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(self(value))
    }
}

#[inline]
pub(crate) fn verdict(ok: bool) -> Verdict {
    if ok {
        Ok(())
    } else {
        Err(Rejection::Unsatisfied)
    }
}
