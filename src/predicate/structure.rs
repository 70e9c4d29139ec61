//! Structural predicates
//!
//! These recurse into sub-validators. A nested failure becomes a
//! [`Rejection`] naming the offending field or key and carrying the nested
//! error; it never escapes as an error of its own.

use std::collections::HashSet;

use super::{verdict, Predicate, Verdict};
use crate::error::{ConfigurationError, Rejection};
use crate::validator::Validator;
use crate::value::{Key, Value};

/// Declaration of a record shape: fields, display name and strictness.
///
/// # Example
///
/// ```rust
/// use waterline::factory::{number, string};
/// use waterline::Shape;
///
/// let user = Shape::new()
///     .field("name", string())
///     .field("age", number().integer())
///     .named("User")
///     .strict();
///
/// assert_eq!(user.label(), "object:User");
/// assert!(user.is_strict());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: Vec<(Key, Validator)>,
    name: Option<String>,
    strict: bool,
}

impl Shape {
    /// An empty, unnamed, non-strict shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Fields are checked in declaration order.
    pub fn field(mut self, key: impl Into<Key>, validator: Validator) -> Self {
        self.fields.push((key.into(), validator));
        self
    }

    /// Name the shape for diagnostics.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Reject records carrying undeclared fields.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Whether undeclared fields are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Declared fields in order.
    pub fn fields(&self) -> &[(Key, Validator)] {
        &self.fields
    }

    /// Condition label: `object` or `object:<name>`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("object:{}", name),
            None => "object".to_string(),
        }
    }
}

impl<K: Into<Key>> FromIterator<(K, Validator)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, Validator)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Shape::new(), |shape, (k, v)| shape.field(k, v))
    }
}

/// Predicate that checks a record against a [`Shape`].
#[derive(Clone, Debug)]
pub struct ShapeCheck {
    shape: Shape,
}

impl ShapeCheck {
    /// Validate the shape declaration.
    ///
    /// Fails with [`ConfigurationError::DuplicateField`] when a field is
    /// declared twice.
    pub fn new(shape: Shape) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for (key, _) in &shape.fields {
            if !seen.insert(key) {
                return Err(ConfigurationError::DuplicateField(key.clone()));
            }
        }
        Ok(Self { shape })
    }

    /// The checked shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Predicate for ShapeCheck {
    fn check(&self, value: &Value) -> Verdict {
        let Some(record) = value.as_record() else {
            return verdict(false);
        };

        for (key, validator) in &self.shape.fields {
            #[cfg(feature = "tracing")]
            tracing::trace!(field = %key, "checking field");

            match record.get(key) {
                None | Some(Value::Null) => return Err(Rejection::MissingField(key.clone())),
                Some(field) => validator
                    .validate(field)
                    .map_err(|cause| Rejection::InvalidField {
                        key: key.clone(),
                        cause: Box::new(cause),
                    })?,
            }
        }

        if self.shape.strict {
            // Null entries count as absent, same as for declared fields.
            if let Some((extra, _)) = record.iter().find(|(k, v)| {
                !v.is_null() && !self.shape.fields.iter().any(|(declared, _)| declared == *k)
            }) {
                return Err(Rejection::UndeclaredField(extra.clone()));
            }
        }

        Ok(())
    }
}

/// Predicate that checks every key of a record.
#[derive(Clone, Debug)]
pub struct EachKey(pub Validator);

impl Predicate for EachKey {
    fn check(&self, value: &Value) -> Verdict {
        let Some(record) = value.as_record() else {
            return verdict(false);
        };
        for key in record.keys() {
            self.0
                .validate(&key.to_value())
                .map_err(|cause| Rejection::InvalidKey {
                    key: key.clone(),
                    cause: Box::new(cause),
                })?;
        }
        Ok(())
    }
}

/// Predicate that checks every value of a record.
#[derive(Clone, Debug)]
pub struct EachValue(pub Validator);

impl Predicate for EachValue {
    fn check(&self, value: &Value) -> Verdict {
        let Some(record) = value.as_record() else {
            return verdict(false);
        };
        for (key, entry) in record {
            self.0
                .validate(entry)
                .map_err(|cause| Rejection::InvalidValue {
                    key: key.clone(),
                    cause: Box::new(cause),
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    fn user_shape() -> Shape {
        Shape::new()
            .field("name", Validator::new().string())
            .field("age", Validator::new().number().integer())
    }

    fn user(age: impl Into<Value>) -> Value {
        Value::from(Record::new().with("name", "test").with("age", age))
    }

    #[test]
    fn test_shape_accepts_matching_record() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        assert_eq!(check.check(&user(20)), Ok(()));
    }

    #[test]
    fn test_shape_rejects_non_record() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        assert_eq!(check.check(&Value::from("user")), Err(Rejection::Unsatisfied));
    }

    #[test]
    fn test_shape_reports_invalid_field() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        let rejection = check.check(&user(20.5)).unwrap_err();
        assert_eq!(rejection.key(), Some(&Key::from("age")));
        assert_eq!(rejection.cause().map(|c| c.label()), Some("integer"));
    }

    #[test]
    fn test_shape_reports_missing_and_null_fields() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        let missing = Value::from(Record::new().with("name", "test"));
        assert_eq!(
            check.check(&missing),
            Err(Rejection::MissingField(Key::from("age")))
        );
        assert_eq!(
            check.check(&user(Value::Null)),
            Err(Rejection::MissingField(Key::from("age")))
        );
    }

    #[test]
    fn test_shape_reports_first_declared_field() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        assert_eq!(
            check.check(&Value::from(Record::new())),
            Err(Rejection::MissingField(Key::from("name")))
        );
    }

    #[test]
    fn test_open_shape_ignores_extra_fields() {
        let check = ShapeCheck::new(user_shape()).unwrap();
        let extra = Value::from(
            Record::new()
                .with("name", "test")
                .with("age", 20)
                .with("email", "a@b"),
        );
        assert_eq!(check.check(&extra), Ok(()));
    }

    #[test]
    fn test_strict_shape_rejects_extra_fields() {
        let check = ShapeCheck::new(user_shape().strict()).unwrap();
        let extra = Value::from(
            Record::new()
                .with("name", "test")
                .with("age", 20)
                .with("email", "a@b"),
        );
        assert_eq!(
            check.check(&extra),
            Err(Rejection::UndeclaredField(Key::from("email")))
        );
        assert_eq!(check.check(&user(20)), Ok(()));
    }

    #[test]
    fn test_strict_shape_ignores_null_extra_fields() {
        let check = ShapeCheck::new(Shape::new().field("id", Validator::new().number()).strict())
            .unwrap();
        let null_extra = Value::from(Record::new().with("id", 1).with("extra", Value::Null));
        assert_eq!(check.check(&null_extra), Ok(()));

        let null_id = Value::from(Record::new().with("id", Value::Null));
        assert_eq!(
            check.check(&null_id),
            Err(Rejection::MissingField(Key::from("id")))
        );
    }

    #[test]
    fn test_duplicate_field_is_configuration_error() {
        let shape = Shape::new()
            .field("id", Validator::new().number())
            .field("id", Validator::new().string());
        assert_eq!(
            ShapeCheck::new(shape).unwrap_err(),
            ConfigurationError::DuplicateField(Key::from("id"))
        );
    }

    #[test]
    fn test_shape_from_iterator() {
        let shape: Shape = [("a", Validator::new().number())].into_iter().collect();
        assert_eq!(shape.fields().len(), 1);
        assert_eq!(shape.label(), "object");
    }

    #[test]
    fn test_each_key() {
        let numeric_keys = EachKey(Validator::new().number());
        assert_eq!(numeric_keys.check(&Value::list(["a", "b"])), Ok(()));

        let named = Value::from(Record::new().with("x", 1));
        let rejection = numeric_keys.check(&named).unwrap_err();
        assert_eq!(rejection.key(), Some(&Key::from("x")));
        assert!(matches!(rejection, Rejection::InvalidKey { .. }));
    }

    #[test]
    fn test_each_value() {
        let strings = EachValue(Validator::new().string());
        assert_eq!(strings.check(&Value::list(["test", "haha"])), Ok(()));

        let mixed = Value::list([Value::from("a"), Value::from(2)]);
        let rejection = strings.check(&mixed).unwrap_err();
        assert_eq!(rejection.key(), Some(&Key::Index(2)));
    }

    #[test]
    fn test_each_on_non_record() {
        assert_eq!(
            EachKey(Validator::new()).check(&Value::from(1)),
            Err(Rejection::Unsatisfied)
        );
        assert_eq!(
            EachValue(Validator::new()).check(&Value::Null),
            Err(Rejection::Unsatisfied)
        );
    }

    #[test]
    fn test_each_on_empty_record() {
        let empty = Value::from(Record::new());
        assert_eq!(EachKey(Validator::new().number()).check(&empty), Ok(()));
        assert_eq!(EachValue(Validator::new().string()).check(&empty), Ok(()));
    }
}
