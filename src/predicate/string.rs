//! String predicates
//!
//! [`Matches`] checks a regular expression; [`Length`] compares the length of
//! a string (in characters) or a record (in entries) against a bound.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::{verdict, Predicate, Verdict};
use crate::error::ConfigurationError;
use crate::value::Value;

/// Predicate that checks a string matches a regular expression.
///
/// The pattern is unanchored: it matches if it is found anywhere in the
/// candidate. Use `^` and `$` for whole-string matches.
#[derive(Clone, Debug)]
pub struct Matches(Regex);

impl Matches {
    /// Compile the pattern.
    ///
    /// ```rust
    /// use waterline::predicate::{Matches, Predicate};
    /// use waterline::Value;
    ///
    /// let digits = Matches::new(r"^\d+$").unwrap();
    /// assert!(digits.check(&Value::from("123")).is_ok());
    /// assert!(Matches::new("(").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        Regex::new(pattern)
            .map(Matches)
            .map_err(|source| ConfigurationError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.0.as_str()
    }
}

impl Predicate for Matches {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        verdict(value.as_str().is_some_and(|s| self.0.is_match(s)))
    }
}

/// How [`Length`] compares against its bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum LengthMode {
    /// Length equals the bound.
    #[default]
    Exact,
    /// Length is strictly below the bound.
    Less,
    /// Length is strictly above the bound.
    Greater,
}

impl LengthMode {
    /// Phrase used in condition labels, e.g. `of length 2`.
    pub fn describe(self, len: usize) -> String {
        match self {
            LengthMode::Exact => format!("of length {}", len),
            LengthMode::Less => format!("shorter than {}", len),
            LengthMode::Greater => format!("longer than {}", len),
        }
    }
}

impl FromStr for LengthMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(LengthMode::Exact),
            "less" => Ok(LengthMode::Less),
            "greater" => Ok(LengthMode::Greater),
            other => Err(ConfigurationError::UnknownLengthMode(other.to_string())),
        }
    }
}

impl fmt::Display for LengthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthMode::Exact => "exact",
            LengthMode::Less => "less",
            LengthMode::Greater => "greater",
        })
    }
}

/// Predicate that compares a length against a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Length {
    len: usize,
    mode: LengthMode,
}

impl Length {
    /// Create a length predicate.
    pub fn new(len: usize, mode: LengthMode) -> Self {
        Self { len, mode }
    }
}

impl Predicate for Length {
    #[inline]
    fn check(&self, value: &Value) -> Verdict {
        let actual = match value {
            Value::Text(s) => s.chars().count(),
            Value::Record(r) => r.len(),
            _ => return verdict(false),
        };
        verdict(match self.mode {
            LengthMode::Exact => actual == self.len,
            LengthMode::Less => actual < self.len,
            LengthMode::Greater => actual > self.len,
        })
    }
}
