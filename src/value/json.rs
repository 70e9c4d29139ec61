//! Conversion from `serde_json` values.

use super::{Record, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Record(Record::sequence(items)),
            serde_json::Value::Object(map) => Value::Record(map.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Key, Kind};
    use serde_json::json;

    #[test]
    fn object_becomes_named_record() {
        let value = Value::from(json!({"name": "test", "age": 20}));
        let record = value.as_record().unwrap();
        assert_eq!(record.get(&Key::from("age")), Some(&Value::from(20)));
    }

    #[test]
    fn array_becomes_sequence() {
        let value = Value::from(json!(["a", null, 3.5]));
        let record = value.as_record().unwrap();
        assert_eq!(record.get(&Key::Index(1)), Some(&Value::from("a")));
        assert_eq!(record.get(&Key::Index(2)).map(Value::kind), Some(Kind::Null));
        assert_eq!(record.get(&Key::Index(3)), Some(&Value::from(3.5)));
    }
}
