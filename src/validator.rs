//! The validator: an ordered chain of conditions
//!
//! A [`Validator`] starts empty (accepting every value) and grows one
//! condition per builder call. Every builder call takes `&self` and returns a
//! new validator, so a shared base never observes what is chained onto it.
//!
//! Evaluation walks the chain in insertion order and stops at the first
//! condition that rejects the candidate.
//!
//! # Example
//!
//! ```rust
//! use waterline::{Validator, Value};
//!
//! let base = Validator::new();
//! let text = base.string();
//! let count = base.number().integer().greater_than(0.0);
//!
//! assert!(base.is_empty());
//! assert!(text.assert(&Value::from("hello")).is_ok());
//! assert!(count.assert(&Value::from(3)).is_ok());
//!
//! let err = count.assert(&Value::from(2.5)).unwrap_err();
//! assert_eq!(err.index(), 2);
//! assert_eq!(
//!     err.to_string(),
//!     "[number, integer, greater than 0] Failed assertion at #2: 2.5 is not integer"
//! );
//! ```

use std::borrow::Cow;

use crate::condition::Condition;
use crate::error::{ConfigurationError, ValidationError};
use crate::predicate::{
    EachKey, EachValue, Either, Equals, GreaterThan, Integer, IsKind, IsNot, Length, LengthMode,
    LessThan, Matches, Optional, Parity, Predicate, Shape, ShapeCheck,
};
use crate::value::{Kind, Value};

/// A composed, immutable set of conditions.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    name: Option<String>,
    conditions: Vec<Condition>,
}

impl Validator {
    /// The empty template. Accepts every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition, returning the extended validator.
    ///
    /// The receiver is left untouched.
    pub fn with_condition(&self, label: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        let mut next = self.clone();
        next.conditions.push(Condition::new(label, predicate));
        next
    }

    /// Append a host-defined check.
    ///
    /// ```rust
    /// use waterline::{Validator, Value};
    ///
    /// let port = Validator::new()
    ///     .number()
    ///     .integer()
    ///     .custom("port", |v: &Value| v.as_number().is_some_and(|n| (1.0..=65535.0).contains(&n)));
    ///
    /// assert!(port.is_valid(&Value::from(8080)));
    /// assert!(!port.is_valid(&Value::from(70000)));
    /// ```
    pub fn custom(&self, label: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        self.with_condition(label, predicate)
    }

    /// Attach a display name, replacing any previous one.
    ///
    /// Only diagnostics change; evaluation outcomes do not.
    pub fn set_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = Some(name.into());
        next
    }

    /// The display name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name used in failure messages.
    ///
    /// Falls back to the condition labels joined by `, `, or `any` for the
    /// empty validator.
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None if self.conditions.is_empty() => Cow::Borrowed("any"),
            None => Cow::Owned(self.labels().collect::<Vec<_>>().join(", ")),
        }
    }

    /// Conditions in evaluation order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Condition labels in evaluation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.conditions.iter().map(Condition::label)
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check a value, stopping at the first rejecting condition.
    ///
    /// This is the quiet form used by structural checks and combinators.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        for (i, condition) in self.conditions.iter().enumerate() {
            if let Err(rejection) = condition.check(value) {
                return Err(ValidationError::new(
                    self.display_name(),
                    i + 1,
                    condition.label(),
                    value.to_string(),
                    rejection,
                ));
            }
        }
        Ok(())
    }

    /// Whether the value passes every condition.
    #[inline]
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }

    /// Check a value at a boundary.
    ///
    /// Same outcome as [`validate`](Self::validate); failures are also
    /// reported through `tracing` when the feature is enabled. The returned
    /// error is the hard failure for the caller to handle.
    pub fn assert(&self, value: &Value) -> Result<(), ValidationError> {
        let result = self.validate(value);
        #[cfg(feature = "tracing")]
        self.trace_outcome(&result);
        result
    }

    #[cfg(feature = "tracing")]
    fn trace_outcome(&self, result: &Result<(), ValidationError>) {
        match result {
            Ok(()) => tracing::trace!(validator = %self.display_name(), "assertion passed"),
            Err(err) => tracing::debug!(
                validator = %err.validator(),
                index = err.index(),
                label = %err.label(),
                "{}",
                err
            ),
        }
    }

    // Kind checks

    /// Require the given kind.
    pub fn kind(&self, kind: Kind) -> Self {
        self.with_condition(kind.as_str(), IsKind(kind))
    }

    /// Require a string.
    pub fn string(&self) -> Self {
        self.kind(Kind::String)
    }

    /// Require a number.
    pub fn number(&self) -> Self {
        self.kind(Kind::Number)
    }

    /// Require a boolean.
    pub fn boolean(&self) -> Self {
        self.kind(Kind::Boolean)
    }

    /// Require a callable.
    pub fn callable(&self) -> Self {
        self.kind(Kind::Callable)
    }

    /// Require the absent value.
    pub fn null(&self) -> Self {
        self.kind(Kind::Null)
    }

    /// Require an opaque handle.
    pub fn opaque(&self) -> Self {
        self.kind(Kind::Opaque)
    }

    /// Require a concurrency handle.
    pub fn task(&self) -> Self {
        self.kind(Kind::Task)
    }

    /// Require a record.
    pub fn record(&self) -> Self {
        self.kind(Kind::Record)
    }

    // Refinements

    /// Require a number with no fractional part.
    pub fn integer(&self) -> Self {
        self.with_condition("integer", Integer)
    }

    /// Require an even number.
    pub fn even(&self) -> Self {
        self.with_condition("even", Parity::Even)
    }

    /// Require an odd number.
    pub fn odd(&self) -> Self {
        self.with_condition("odd", Parity::Odd)
    }

    /// Require a number strictly below `n`.
    pub fn less_than(&self, n: f64) -> Self {
        self.with_condition(format!("less than {}", Value::Number(n)), LessThan(n))
    }

    /// Require a number strictly above `n`.
    pub fn greater_than(&self, n: f64) -> Self {
        self.with_condition(format!("greater than {}", Value::Number(n)), GreaterThan(n))
    }

    /// Require a string matching a regular expression.
    ///
    /// The pattern is compiled here; an invalid pattern is a
    /// [`ConfigurationError`].
    pub fn matches(&self, pattern: &str) -> Result<Self, ConfigurationError> {
        let predicate = Matches::new(pattern);
        #[cfg(feature = "tracing")]
        let predicate = predicate.inspect_err(|err| tracing::warn!("invalid pattern: {}", err));
        Ok(self.with_condition(format!("matching /{}/", pattern), predicate?))
    }

    /// Require a length of exactly `len`.
    pub fn length(&self, len: usize) -> Self {
        self.length_with(len, LengthMode::Exact)
    }

    /// Require a length compared to `len` per `mode`.
    pub fn length_with(&self, len: usize, mode: LengthMode) -> Self {
        self.with_condition(mode.describe(len), Length::new(len, mode))
    }

    /// Require equality by value.
    pub fn equals(&self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        self.with_condition(format!("equal to {}", expected), Equals(expected))
    }

    // Structural

    /// Require a record of the given shape.
    ///
    /// A shape declaring a field twice is a [`ConfigurationError`].
    pub fn object(&self, shape: Shape) -> Result<Self, ConfigurationError> {
        let label = shape.label();
        let check = ShapeCheck::new(shape);
        #[cfg(feature = "tracing")]
        let check = check.inspect_err(|err| tracing::warn!(shape = %label, "invalid shape: {}", err));
        Ok(self.with_condition(label, check?))
    }

    /// Require a record whose every key satisfies `keys`.
    pub fn keys(&self, keys: &Validator) -> Self {
        self.with_condition("keys", EachKey(keys.clone()))
    }

    /// Require a record whose every value satisfies `values`.
    pub fn values(&self, values: &Validator) -> Self {
        self.with_condition("values", EachValue(values.clone()))
    }

    /// Require a record with numeric keys.
    ///
    /// Indices need not be contiguous.
    pub fn array(&self) -> Self {
        self.with_condition("array", EachKey(Validator::new().number()))
    }

    // Combinators

    /// Accept null, otherwise require `inner`.
    pub fn optional(&self, inner: &Validator) -> Self {
        self.with_condition("optional", Optional(inner.clone()))
    }

    /// Require at least one alternative to accept.
    ///
    /// No alternatives is a [`ConfigurationError`].
    pub fn either(
        &self,
        alternatives: impl IntoIterator<Item = Validator>,
    ) -> Result<Self, ConfigurationError> {
        let either = Either::new(alternatives);
        #[cfg(feature = "tracing")]
        let either = either.inspect_err(|err| tracing::warn!("invalid either: {}", err));
        Ok(self.with_condition("either", either?))
    }

    /// Require `inner` to reject.
    pub fn is_not(&self, inner: &Validator) -> Self {
        self.with_condition(format!("not {}", inner.display_name()), IsNot(inner.clone()))
    }
}
