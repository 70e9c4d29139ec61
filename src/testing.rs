//! Testing utilities
//!
//! Assertion macros for validator outcomes, and property-based testing
//! support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use waterline::factory::number;
//! use waterline::{assert_accepts, assert_rejected_at, assert_rejects, Value};
//!
//! let v = number().integer();
//! assert_accepts!(v, Value::from(2));
//! assert_rejects!(v, Value::from("2"));
//! assert_rejected_at!(v, Value::from(2.5), 2);
//! ```

/// Assert that a validator accepts a value.
///
/// This macro will panic with the validation error if the value is rejected.
#[macro_export]
macro_rules! assert_accepts {
    ($validator:expr, $value:expr) => {
        match $validator.validate(&$value) {
            Ok(()) => {}
            Err(e) => {
                panic!("Expected value to be accepted, got: {}", e);
            }
        }
    };
}

/// Assert that a validator rejects a value.
///
/// This macro will panic if the value is accepted.
#[macro_export]
macro_rules! assert_rejects {
    ($validator:expr, $value:expr) => {
        match $validator.validate(&$value) {
            Err(_) => {}
            Ok(()) => {
                panic!("Expected value to be rejected, got acceptance of {}", $value);
            }
        }
    };
}

/// Assert that a validator rejects a value at a specific 1-based condition.
///
/// # Example
///
/// ```rust
/// use waterline::factory::number;
/// use waterline::{assert_rejected_at, Value};
///
/// assert_rejected_at!(number().even(), Value::from(3), 2);
/// ```
#[macro_export]
macro_rules! assert_rejected_at {
    ($validator:expr, $value:expr, $index:expr) => {
        match $validator.validate(&$value) {
            Err(e) => {
                assert_eq!(e.index(), $index, "rejected at the wrong condition: {}", e);
            }
            Ok(()) => {
                panic!(
                    "Expected rejection at #{}, got acceptance of {}",
                    $index, $value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::value::{Record, Value};

/// Strategy for scalar values: null, booleans, numbers and strings.
#[cfg(feature = "proptest")]
pub fn arb_scalar() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::Text),
    ]
    .boxed()
}

/// Strategy for values nested up to `depth` record levels.
#[cfg(feature = "proptest")]
pub fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    arb_scalar()
        .prop_recursive(depth, 32, 4, |inner| {
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|entries| {
                Value::Record(entries.into_iter().collect::<Record>())
            })
        })
        .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        arb_value(3)
    }
}
