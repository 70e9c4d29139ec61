//! Error taxonomy
//!
//! - [`ValidationError`]: a condition rejected a candidate. Carries the
//!   1-based condition index, its label, the validator's display name, a
//!   rendering of the rejected value and a structured [`Rejection`].
//! - [`ConfigurationError`]: a validator could not be built from the given
//!   declaration. Returned by the builder, never during evaluation.
//!
//! # Example
//!
//! ```rust
//! use waterline::factory::{number, object, string};
//! use waterline::{Shape, Value};
//! use waterline::value::{Key, Record};
//!
//! let user = object(
//!     Shape::new()
//!         .field("name", string())
//!         .field("age", number().integer())
//!         .named("User"),
//! )
//! .unwrap();
//!
//! let err = user
//!     .assert(&Value::from(Record::new().with("name", "test").with("age", 20.5)))
//!     .unwrap_err();
//!
//! assert_eq!(err.field(), Some(&Key::from("age")));
//! assert_eq!(err.root_cause().label(), "integer");
//! ```

use std::fmt;

use thiserror::Error;

use crate::value::Key;

/// Why a single condition rejected its candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rejection {
    /// The predicate evaluated to false.
    Unsatisfied,
    /// A declared field was absent or null.
    MissingField(Key),
    /// A strict shape met a field it does not declare.
    UndeclaredField(Key),
    /// A declared field failed its sub-validator.
    InvalidField {
        /// The offending field.
        key: Key,
        /// The sub-validator's failure.
        cause: Box<ValidationError>,
    },
    /// A record key failed the key validator.
    InvalidKey {
        /// The offending key.
        key: Key,
        /// The key validator's failure.
        cause: Box<ValidationError>,
    },
    /// A record value failed the value validator.
    InvalidValue {
        /// Key of the offending value.
        key: Key,
        /// The value validator's failure.
        cause: Box<ValidationError>,
    },
    /// A wrapped validator failed.
    Nested(Box<ValidationError>),
    /// None of the alternatives accepted the candidate.
    NoAlternative,
}

impl Rejection {
    /// The nested failure, if this rejection came from a sub-validator.
    pub fn cause(&self) -> Option<&ValidationError> {
        match self {
            Rejection::InvalidField { cause, .. }
            | Rejection::InvalidKey { cause, .. }
            | Rejection::InvalidValue { cause, .. }
            | Rejection::Nested(cause) => Some(cause),
            _ => None,
        }
    }

    /// The offending field or key, if any.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Rejection::MissingField(key)
            | Rejection::UndeclaredField(key)
            | Rejection::InvalidField { key, .. }
            | Rejection::InvalidKey { key, .. }
            | Rejection::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Renders as a suffix to the "is not <label>" sentence.
impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unsatisfied => Ok(()),
            Rejection::MissingField(key) => write!(f, ": missing field `{}`", key),
            Rejection::UndeclaredField(key) => write!(f, ": undeclared field `{}`", key),
            Rejection::InvalidField { key, cause } => write!(f, ": field `{}` -> {}", key, cause),
            Rejection::InvalidKey { key, cause } => write!(f, ": key `{}` -> {}", key, cause),
            Rejection::InvalidValue { key, cause } => {
                write!(f, ": value at `{}` -> {}", key, cause)
            }
            Rejection::Nested(cause) => write!(f, " -> {}", cause),
            Rejection::NoAlternative => f.write_str(": no alternative matched"),
        }
    }
}

/// A condition rejected a candidate value.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("[{validator}] Failed assertion at #{index}: {value} is not {label}{rejection}")]
pub struct ValidationError {
    validator: String,
    index: usize,
    label: String,
    value: String,
    rejection: Rejection,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(
        validator: impl Into<String>,
        index: usize,
        label: impl Into<String>,
        value: impl Into<String>,
        rejection: Rejection,
    ) -> Self {
        Self {
            validator: validator.into(),
            index,
            label: label.into(),
            value: value.into(),
            rejection,
        }
    }

    /// Display name of the validator that failed.
    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// 1-based position of the failing condition.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Label of the failing condition.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rendering of the rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Structured reason.
    pub fn rejection(&self) -> &Rejection {
        &self.rejection
    }

    /// The offending field or key reported by a structural condition.
    pub fn field(&self) -> Option<&Key> {
        self.rejection.key()
    }

    /// The innermost failure, following nested causes.
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(cause) = current.rejection.cause() {
            current = cause;
        }
        current
    }
}

/// A validator could not be built from its declaration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The pattern given to `matches` is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },
    /// A shape declares the same field twice.
    #[error("duplicate field `{0}` in shape")]
    DuplicateField(Key),
    /// `either` was given nothing to choose from.
    #[error("either requires at least one alternative")]
    EmptyAlternatives,
    /// A length mode name was not recognised.
    #[error("unknown length mode `{0}` (expected exact, less or greater)")]
    UnknownLengthMode(String),
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A candidate was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A validator was misconfigured.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> ValidationError {
        ValidationError::new("number, integer", 2, "integer", "20.5", Rejection::Unsatisfied)
    }

    #[test]
    fn message_format() {
        assert_eq!(
            leaf().to_string(),
            "[number, integer] Failed assertion at #2: 20.5 is not integer"
        );
    }

    #[test]
    fn nested_message_names_field() {
        let err = ValidationError::new(
            "User",
            1,
            "object:User",
            "{age: 20.5}",
            Rejection::InvalidField {
                key: Key::from("age"),
                cause: Box::new(leaf()),
            },
        );
        assert_eq!(
            err.to_string(),
            "[User] Failed assertion at #1: {age: 20.5} is not object:User: field `age` -> \
             [number, integer] Failed assertion at #2: 20.5 is not integer"
        );
        assert_eq!(err.field(), Some(&Key::from("age")));
        assert_eq!(err.root_cause(), &leaf());
    }

    #[test]
    fn root_cause_of_leaf_is_itself() {
        let err = leaf();
        assert_eq!(err.root_cause(), &err);
        assert_eq!(err.field(), None);
    }

    #[test]
    fn configuration_messages() {
        assert_eq!(
            ConfigurationError::DuplicateField(Key::from("id")).to_string(),
            "duplicate field `id` in shape"
        );
        assert_eq!(
            ConfigurationError::EmptyAlternatives.to_string(),
            "either requires at least one alternative"
        );
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: Error = leaf().into();
        assert_eq!(err.to_string(), leaf().to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_structured_failure() {
        let err = ValidationError::new(
            "User",
            1,
            "object:User",
            "{}",
            Rejection::MissingField(Key::from("name")),
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["rejection"]["MissingField"], "name");
    }
}
