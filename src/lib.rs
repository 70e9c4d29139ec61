//! # Waterline
//!
//! > *Check what comes over the side.*
//!
//! Composable runtime validators for values whose type is not known until
//! the program runs: deserialized payloads, configuration, data handed over
//! by plugins or scripts.
//!
//! ## Philosophy
//!
//! A [`Validator`] is an ordered chain of named conditions. Builder calls
//! append one condition and return a new validator; evaluation walks the
//! chain and stops at the first condition that rejects the candidate.
//!
//! - **Pure core**: validators are immutable values, safe to share across
//!   threads, and evaluation has no side effects.
//! - **Structured failures**: a [`ValidationError`] says which condition
//!   failed, on what value, and for structural checks which field or key.
//! - **Thin shell**: rendering and logging are left to the host.
//!
//! ## Quick Example
//!
//! ```rust
//! use waterline::factory::{either, is_not, keys, number, object, record, string};
//! use waterline::value::Record;
//! use waterline::{Shape, Value};
//!
//! let user = object(
//!     Shape::new()
//!         .field("name", string())
//!         .field("age", number().integer())
//!         .named("User"),
//! )
//! .unwrap();
//!
//! let ok = Value::from(Record::new().with("name", "test").with("age", 20));
//! assert!(user.assert(&ok).is_ok());
//!
//! let bad = Value::from(Record::new().with("name", "test").with("age", 20.5));
//! let err = user.assert(&bad).unwrap_err();
//! assert_eq!(err.root_cause().label(), "integer");
//!
//! let list = keys(&number()).values(&string());
//! assert!(list.assert(&Value::list(["test", "haha", "test"])).is_ok());
//!
//! let scalar = either([number(), string(), record()]).unwrap();
//! assert!(scalar.assert(&Value::from(true)).is_err());
//!
//! assert!(is_not(&string().length(2)).assert(&Value::from(2)).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod condition;
pub mod error;
pub mod factory;
pub mod predicate;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use condition::Condition;
pub use error::{ConfigurationError, Error, Rejection, ValidationError};
pub use predicate::{LengthMode, Predicate, Shape};
pub use validator::Validator;
pub use value::{Kind, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ConfigurationError, Error, Rejection, ValidationError};
    pub use crate::factory::*;
    pub use crate::predicate::{LengthMode, Predicate, Shape};
    pub use crate::validator::Validator;
    pub use crate::value::{Callable, Key, Kind, Opaque, Record, Task, Value};
}
