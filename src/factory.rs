//! Free-function entry points
//!
//! Each function starts a fresh chain from the empty template, so
//! `number().integer()` reads like a declaration. The template is a plain
//! value: nothing global is touched.
//!
//! # Example
//!
//! ```rust
//! use waterline::factory::*;
//! use waterline::value::Record;
//! use waterline::{Shape, Value};
//!
//! let user = object(
//!     Shape::new()
//!         .field("name", string())
//!         .field("age", number().integer())
//!         .field("nickname", optional(&string()))
//!         .named("User"),
//! )
//! .unwrap();
//!
//! let alice = Record::new().with("name", "alice").with("age", 30);
//! assert!(user.assert(&Value::from(alice.clone().with("nickname", "al"))).is_ok());
//!
//! // A declared field must be present even when its validator is optional.
//! assert!(user.assert(&Value::from(alice)).is_err());
//! ```

use crate::error::ConfigurationError;
use crate::predicate::{LengthMode, Predicate, Shape};
use crate::validator::Validator;
use crate::value::{Kind, Value};

/// The empty template.
pub fn validator() -> Validator {
    Validator::new()
}

/// Start a chain with a host-defined check.
pub fn custom(label: impl Into<String>, predicate: impl Predicate + 'static) -> Validator {
    Validator::new().custom(label, predicate)
}

/// Require the given kind.
pub fn kind(kind: Kind) -> Validator {
    Validator::new().kind(kind)
}

/// Require a string.
pub fn string() -> Validator {
    Validator::new().string()
}

/// Require a number.
pub fn number() -> Validator {
    Validator::new().number()
}

/// Require a boolean.
pub fn boolean() -> Validator {
    Validator::new().boolean()
}

/// Require a callable.
pub fn callable() -> Validator {
    Validator::new().callable()
}

/// Require the absent value.
pub fn null() -> Validator {
    Validator::new().null()
}

/// Require an opaque handle.
pub fn opaque() -> Validator {
    Validator::new().opaque()
}

/// Require a concurrency handle.
pub fn task() -> Validator {
    Validator::new().task()
}

/// Require a record.
pub fn record() -> Validator {
    Validator::new().record()
}

/// Require an integral number (kind included).
pub fn integer() -> Validator {
    Validator::new().number().integer()
}

/// Require a string matching `pattern` (kind included).
pub fn matches(pattern: &str) -> Result<Validator, ConfigurationError> {
    Validator::new().string().matches(pattern)
}

/// Require a string of length `len` compared per `mode` (kind included).
pub fn length(len: usize, mode: LengthMode) -> Validator {
    Validator::new().string().length_with(len, mode)
}

/// Require equality with `expected`.
pub fn equals(expected: impl Into<Value>) -> Validator {
    Validator::new().equals(expected)
}

/// Require a record of the given shape.
pub fn object(shape: Shape) -> Result<Validator, ConfigurationError> {
    Validator::new().object(shape)
}

/// Require a record whose keys all satisfy `keys`.
pub fn keys(keys: &Validator) -> Validator {
    Validator::new().keys(keys)
}

/// Require a record whose values all satisfy `values`.
pub fn values(values: &Validator) -> Validator {
    Validator::new().values(values)
}

/// Require a record with numeric keys.
pub fn array() -> Validator {
    Validator::new().array()
}

/// Accept null, otherwise require `inner`.
pub fn optional(inner: &Validator) -> Validator {
    Validator::new().optional(inner)
}

/// Require at least one alternative.
pub fn either(
    alternatives: impl IntoIterator<Item = Validator>,
) -> Result<Validator, ConfigurationError> {
    Validator::new().either(alternatives)
}

/// Require `inner` to reject.
pub fn is_not(inner: &Validator) -> Validator {
    Validator::new().is_not(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_start_fresh_chains() {
        let a = number();
        let b = number();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(validator().is_empty());
    }

    #[test]
    fn integer_includes_kind() {
        assert_eq!(integer().labels().collect::<Vec<_>>(), vec!["number", "integer"]);
        assert!(!integer().is_valid(&Value::from("1")));
    }

    #[test]
    fn length_includes_kind() {
        let v = length(3, LengthMode::Greater);
        assert!(v.is_valid(&Value::from("abcd")));
        assert!(!v.is_valid(&Value::from(1234)));
    }

    #[test]
    fn matches_rejects_bad_pattern() {
        assert!(matches("a{").is_err());
    }
}
