//! Assertion macros from the testing module, used as a host would.

use waterline::factory::*;
use waterline::value::Record;
use waterline::{assert_accepts, assert_rejected_at, assert_rejects, Shape, Validator, Value};

fn email() -> Validator {
    string().matches(r"^[^@\s]+@[^@\s]+\.[a-z]+$").unwrap().set_name("Email")
}

fn signup() -> Validator {
    object(
        Shape::new()
            .field("email", email())
            .field("age", number().integer().greater_than(17.0))
            .named("Signup")
            .strict(),
    )
    .unwrap()
}

#[test]
fn test_assert_accepts_valid_email() {
    assert_accepts!(email(), Value::from("user@example.com"));
}

#[test]
fn test_assert_rejects_invalid_email() {
    assert_rejects!(email(), Value::from("invalid"));
    assert_rejects!(email(), Value::from(42));
}

#[test]
fn test_assert_rejected_at_reports_condition() {
    assert_rejected_at!(email(), Value::from(42), 1);
    assert_rejected_at!(email(), Value::from("nope"), 2);
}

#[test]
fn test_signup_accepts_adult() {
    let value = Value::from(Record::new().with("email", "a@b.io").with("age", 30));
    assert_accepts!(signup(), value);
}

#[test]
fn test_signup_rejects_minor_and_extra_fields() {
    let minor = Value::from(Record::new().with("email", "a@b.io").with("age", 15));
    assert_rejects!(signup(), minor);

    let extra = Value::from(
        Record::new()
            .with("email", "a@b.io")
            .with("age", 30)
            .with("admin", true),
    );
    assert_rejects!(signup(), extra);
}
