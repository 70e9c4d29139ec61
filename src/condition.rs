//! A labelled predicate: one link in a validator's chain.

use std::fmt;
use std::sync::Arc;

use crate::predicate::{Predicate, Verdict};
use crate::value::Value;

/// One named, checkable predicate.
///
/// Cloning shares the predicate; conditions are immutable once built.
#[derive(Clone)]
pub struct Condition {
    label: String,
    predicate: Arc<dyn Predicate>,
}

impl Condition {
    /// Create a condition from a label and a predicate.
    pub fn new(label: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Label used in failure messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the predicate.
    #[inline]
    pub fn check(&self, value: &Value) -> Verdict {
        self.predicate.check(value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_check() {
        let c = Condition::new("positive", |v: &Value| v.as_number().is_some_and(|n| n > 0.0));
        assert_eq!(c.label(), "positive");
        assert!(c.check(&Value::from(1)).is_ok());
        assert!(c.check(&Value::from(-1)).is_err());
    }

    #[test]
    fn clones_share_predicate() {
        let c = Condition::new("any", |_: &Value| true);
        let d = c.clone();
        assert!(Arc::ptr_eq(&c.predicate, &d.predicate));
    }
}
