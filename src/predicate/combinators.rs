//! Logical combinators over validators
//!
//! - [`Optional`]: null passes, anything else must satisfy the inner validator
//! - [`Either`]: at least one alternative must accept, tried in order
//! - [`IsNot`]: passes exactly when the inner validator rejects

use super::{verdict, Predicate, Verdict};
use crate::error::{ConfigurationError, Rejection};
use crate::validator::Validator;
use crate::value::Value;

/// Null passes; a present value must satisfy the inner validator.
///
/// A present but invalid value is not swallowed: the rejection carries the
/// inner failure.
#[derive(Clone, Debug)]
pub struct Optional(pub Validator);

impl Predicate for Optional {
    fn check(&self, value: &Value) -> Verdict {
        if value.is_null() {
            return Ok(());
        }
        self.0
            .validate(value)
            .map_err(|cause| Rejection::Nested(Box::new(cause)))
    }
}

/// Passes when any alternative accepts; the first success short-circuits.
///
/// When every alternative rejects, the rejection is a single
/// [`Rejection::NoAlternative`] without per-alternative reasons.
#[derive(Clone, Debug)]
pub struct Either {
    alternatives: Vec<Validator>,
}

impl Either {
    /// Fails with [`ConfigurationError::EmptyAlternatives`] when given none.
    pub fn new(
        alternatives: impl IntoIterator<Item = Validator>,
    ) -> Result<Self, ConfigurationError> {
        let alternatives: Vec<_> = alternatives.into_iter().collect();
        if alternatives.is_empty() {
            return Err(ConfigurationError::EmptyAlternatives);
        }
        Ok(Self { alternatives })
    }

    /// The alternatives in trial order.
    pub fn alternatives(&self) -> &[Validator] {
        &self.alternatives
    }
}

impl Predicate for Either {
    fn check(&self, value: &Value) -> Verdict {
        if self.alternatives.iter().any(|alt| alt.is_valid(value)) {
            Ok(())
        } else {
            Err(Rejection::NoAlternative)
        }
    }
}

/// Passes exactly when the inner validator rejects.
#[derive(Clone, Debug)]
pub struct IsNot(pub Validator);

impl Predicate for IsNot {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(!self.0.is_valid(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_optional_accepts_null() {
        let p = Optional(Validator::new().number());
        assert_eq!(p.check(&Value::Null), Ok(()));
        assert_eq!(p.check(&Value::from(3)), Ok(()));
    }

    #[test]
    fn test_optional_propagates_inner_failure() {
        let p = Optional(Validator::new().number());
        let rejection = p.check(&Value::from("3")).unwrap_err();
        assert!(matches!(rejection, Rejection::Nested(_)));
        assert_eq!(rejection.cause().map(|c| c.label()), Some("number"));
    }

    #[test]
    fn test_either_any_alternative() {
        let p = Either::new([
            Validator::new().number(),
            Validator::new().string(),
            Validator::new().record(),
        ])
        .unwrap();
        assert_eq!(p.check(&Value::from(1)), Ok(()));
        assert_eq!(p.check(&Value::from("a")), Ok(()));
        assert_eq!(p.check(&Value::from(Record::new())), Ok(()));
        assert_eq!(p.check(&Value::from(true)), Err(Rejection::NoAlternative));
    }

    #[test]
    fn test_either_requires_alternatives() {
        assert_eq!(
            Either::new(Vec::new()).unwrap_err(),
            ConfigurationError::EmptyAlternatives
        );
    }

    #[test]
    fn test_is_not() {
        let p = IsNot(Validator::new().string().length(2));
        assert_eq!(p.check(&Value::from(2)), Ok(()));
        assert_eq!(p.check(&Value::from("abc")), Ok(()));
        assert_eq!(p.check(&Value::from("ab")), Err(Rejection::Unsatisfied));
    }

    #[test]
    fn test_is_not_over_either() {
        let neither = IsNot(
            Validator::new()
                .either([Validator::new().number(), Validator::new().string()])
                .unwrap(),
        );
        assert_eq!(neither.check(&Value::from(true)), Ok(()));
        assert!(neither.check(&Value::from(1)).is_err());
    }

    #[test]
    fn test_is_not_of_empty_validator_rejects_everything() {
        let p = IsNot(Validator::new());
        assert!(p.check(&Value::Null).is_err());
        assert!(p.check(&Value::from(1)).is_err());
    }
}
