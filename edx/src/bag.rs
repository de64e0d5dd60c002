//! Open attribute bags.
//!
//! Entities carry an [`AttributeBag`] for type-specific data the fixed schema
//! does not model (`properties`, `other-properties`, `layer-properties`,
//! `Settings`). The bag holds an arbitrary JSON tree with insertion-ordered
//! maps and is written only when non-empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untyped, arbitrarily nested key/value structure.
///
/// `Null`, `{}` and `[]` all count as empty and compare equal to each other,
/// matching how an omitted bag is restored on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag(Value);

impl AttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Value::Null)
    }

    /// True when the bag holds nothing worth persisting.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Look up a top-level key. Returns `None` when the bag is not a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// Insert a top-level key, turning the bag into a map if needed.
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        match &mut self.0 {
            Value::Object(map) => map.insert(key.into(), value.into()),
            _ => None,
        }
    }

    /// Remove a top-level key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.as_object_mut().and_then(|map| map.shift_remove(key))
    }

    /// Number of top-level entries (map keys or array items).
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    /// Borrow the underlying value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the bag and return the underlying value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl PartialEq for AttributeBag {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty()) || self.0 == other.0
    }
}

impl From<Value> for AttributeBag {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Map<String, Value>> for AttributeBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}
