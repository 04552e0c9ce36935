use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Argument values supplied for one field occurrence, keyed by argument name.
/// The map is ordered so serialized output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentsMap {
    arguments_map: BTreeMap<String, Value>,
}

impl ArgumentsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_argument(&mut self, key: String, value: Value) {
        self.arguments_map.insert(key, value);
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments_map.insert(key.into(), value.into());
        self
    }

    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments_map.contains_key(key)
    }

    pub fn get_argument(&self, key: &str) -> Option<&Value> {
        self.arguments_map.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.arguments_map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.arguments_map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.arguments_map.iter()
    }
}

impl FromIterator<(String, Value)> for ArgumentsMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ArgumentsMap {
            arguments_map: iter.into_iter().collect(),
        }
    }
}
