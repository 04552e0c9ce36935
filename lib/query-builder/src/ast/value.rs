use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Argument value literal. `Variable` marks a value that is emitted as a
/// `$name` placeholder instead of being inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn variable(name: impl Into<String>) -> Self {
        Value::Variable(name.into())
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(_))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, field)| (name.clone(), Value::from(field)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_conversion_keeps_structure() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{"term": "rust", "limit": 10, "exact": false, "tags": ["a", "b"]}"#,
        )
        .unwrap();

        let value = Value::from(&json);
        let Value::Object(fields) = value else {
            panic!("expected an object literal");
        };
        assert_eq!(fields.get("term"), Some(&Value::String("rust".to_string())));
        assert_eq!(fields.get("limit"), Some(&Value::Int(10)));
        assert_eq!(fields.get("exact"), Some(&Value::Boolean(false)));
        assert_eq!(
            fields.get("tags"),
            Some(&Value::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn json_floats_stay_floats() {
        let json: serde_json::Value = serde_json::from_str("3.25").unwrap();
        assert_eq!(Value::from(&json), Value::Float(3.25));
    }
}
