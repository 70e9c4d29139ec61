//! Keyed mappings

use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Value;

/// A record key: a number or a field name.
///
/// Integral numbers are stored as [`Key::Index`]; [`Key::number`] does the
/// normalisation. Numeric keys order numerically and before names so
/// sequences iterate first.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Key {
    /// Integer index.
    Index(i64),
    /// Non-integral numeric key.
    Number(f64),
    /// Field name.
    Name(String),
}

impl Key {
    /// A numeric key, stored as an index when `n` is integral and in range.
    ///
    /// ```rust
    /// use waterline::value::Key;
    ///
    /// assert_eq!(Key::number(2.0), Key::Index(2));
    /// assert_eq!(Key::number(1.5), Key::Number(1.5));
    /// ```
    pub fn number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Key::Index(n as i64)
        } else {
            Key::Number(n)
        }
    }

    /// The numeric value of the key, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Key::Index(i) => Some(*i as f64),
            Key::Number(n) => Some(*n),
            Key::Name(_) => None,
        }
    }

    /// The key as a candidate value, for validating keys themselves.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(i) => Value::Number(*i as f64),
            Key::Number(n) => Value::Number(*n),
            Key::Name(n) => Value::Text(n.clone()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::Index(_) => 0,
            Key::Number(_) => 1,
            Key::Name(_) => 2,
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a.cmp(b),
            (Key::Name(a), Key::Name(b)) => a.cmp(b),
            (Key::Name(_), _) | (_, Key::Name(_)) => self.rank().cmp(&other.rank()),
            _ => {
                let (a, b) = (self.as_number(), other.as_number());
                let (a, b) = (a.unwrap_or_default(), b.unwrap_or_default());
                a.total_cmp(&b).then_with(|| self.rank().cmp(&other.rank()))
            }
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a == b,
            (Key::Number(a), Key::Number(b)) => a.to_bits() == b.to_bits(),
            (Key::Name(a), Key::Name(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Key::Index(i) => i.hash(state),
            Key::Number(n) => n.to_bits().hash(state),
            Key::Name(n) => n.hash(state),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Number(n) => write!(f, "{}", n),
            Key::Name(n) => f.write_str(n),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(i64::from(value))
    }
}

// Past i64::MAX the key falls back to a numeric key instead of wrapping.
impl From<usize> for Key {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Key::Number(value as f64), Key::Index)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::number(value)
    }
}

/// An ordered mapping from [`Key`] to [`Value`].
///
/// # Example
///
/// ```rust
/// use waterline::value::{Record, Value};
///
/// let record = Record::new().with("name", "test").with("age", 20);
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get(&"age".into()), Some(&Value::from(20)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: BTreeMap<Key, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record keyed `1..=n` from the items in order.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i + 1), v.into()))
            .collect()
    }

    /// Add an entry, returning the record for chaining.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry, returning the previous value under that key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Values in key order.
    pub fn values(&self) -> btree_map::Values<'_, Key, Value> {
        self.entries.values()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
