//! Scalar wrappers that give wire values total equality and hashing.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use serde_json::Value;

/// A floating point attribute. Compares and hashes by bit pattern so that
/// models holding floats can be `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float(pub f64);

impl Float {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Float(value)
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// An untyped JSON value (`Object` in the API definitions), e.g. the leaves of
/// `definedTags`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnyValue(pub Value);

impl AnyValue {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        AnyValue(value)
    }
}

impl Hash for AnyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

// Object keys are hashed in sorted order: `Value` equality ignores key order.
fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            n.to_string().hash(state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            for (key, item) in map.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                key.hash(state);
                hash_value(item, state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_float_equality_by_bits() {
        assert_eq!(Float(1.5), Float(1.5));
        assert_eq!(Float(f64::NAN), Float(f64::NAN));
        assert_ne!(Float(0.0), Float(-0.0));
        assert_eq!(hash_of(&Float(2.25)), hash_of(&Float(2.25)));
    }

    #[test]
    fn test_any_value_hash_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"x": 1, "y": [true, null]}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y": [true, null], "x": 1}"#).unwrap();
        assert_eq!(AnyValue(a.clone()), AnyValue(b.clone()));
        assert_eq!(hash_of(&AnyValue(a)), hash_of(&AnyValue(b)));
    }

    #[test]
    fn test_any_value_distinguishes_types() {
        assert_ne!(hash_of(&AnyValue(json!("1"))), hash_of(&AnyValue(json!(1))));
    }
}
