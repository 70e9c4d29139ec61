//! Kind and equality predicates

use super::{verdict, Predicate, Verdict};
use crate::value::{Kind, Value};

/// Predicate that checks the runtime kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsKind(pub Kind);

impl Predicate for IsKind {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(value.kind() == self.0)
    }
}

/// Predicate for equality by value.
///
/// Handles (callables, opaque data, tasks) are equal only to themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Equals(pub Value);

impl Predicate for Equals {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(*value == self.0)
    }
}
