//! Dynamically-typed candidate values
//!
//! Validators check [`Value`]s: a closed variant covering every kind of data
//! that can cross an untyped boundary (deserialized payloads, configuration,
//! host callbacks). Kind checks are plain tag matches against [`Kind`].
//!
//! # Example
//!
//! ```rust
//! use waterline::value::{Kind, Record, Value};
//!
//! let user = Value::from(
//!     Record::new()
//!         .with("name", "test")
//!         .with("age", 20),
//! );
//!
//! assert_eq!(user.kind(), Kind::Record);
//! assert_eq!(user.to_string(), r#"{age: 20, name: "test"}"#);
//! ```

mod handle;
#[cfg(feature = "json")]
mod json;
mod record;

use std::fmt;

pub use handle::{Callable, Opaque, Task};
pub use record::{Key, Record};

/// Runtime kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Kind {
    /// The absent value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A double-precision number.
    Number,
    /// A text string.
    String,
    /// A keyed mapping; sequences are records with integer keys.
    Record,
    /// A host function.
    Callable,
    /// An opaque host handle.
    Opaque,
    /// A concurrency handle.
    Task,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 8] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Number,
        Kind::String,
        Kind::Record,
        Kind::Callable,
        Kind::Opaque,
        Kind::Task,
    ];

    /// The lowercase name used in condition labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Record => "record",
            Kind::Callable => "callable",
            Kind::Opaque => "opaque",
            Kind::Task => "task",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate value of statically unknown type.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Number. Integers are numbers with no fractional part.
    Number(f64),
    /// Text.
    Text(String),
    /// Keyed mapping.
    Record(Record),
    /// Host function.
    Callable(Callable),
    /// Opaque host handle.
    Opaque(Opaque),
    /// Concurrency handle.
    Task(Task),
}

impl Value {
    /// Build a sequence: a record keyed `1..=n` in iteration order.
    ///
    /// ```rust
    /// use waterline::value::{Key, Value};
    ///
    /// let list = Value::list(["a", "b"]);
    /// let record = list.as_record().unwrap();
    /// assert_eq!(record.get(&Key::Index(2)), Some(&Value::from("b")));
    /// ```
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Record(Record::sequence(items))
    }

    /// The runtime kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::String,
            Value::Record(_) => Kind::Record,
            Value::Callable(_) => Kind::Callable,
            Value::Opaque(_) => Kind::Opaque,
            Value::Task(_) => Kind::Task,
        }
    }

    /// Whether this is the absent value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The number, if this is one.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean, if this is one.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The record, if this is one.
    #[inline]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

// Handles compare by identity, everything else by value.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Task(a), Value::Task(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Record(r) => write!(f, "{}", r),
            Value::Callable(c) => write!(f, "callable:{}", c.name()),
            Value::Opaque(o) => write!(f, "opaque:{}", o.type_name()),
            Value::Task(t) => write!(f, "task#{}", t.id()),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Callable(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl From<Task> for Value {
    fn from(value: Task) -> Self {
        Value::Task(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::list(value)
    }
}
