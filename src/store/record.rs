//! # Records
//!
//! A record is an untyped, order-preserving JSON object. The store only
//! ever looks at two fields: `id` and, on insert, `created_at`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved identifier field
pub const ID_FIELD: &str = "id";

/// Creation timestamp field, stamped on insert
pub const CREATED_AT_FIELD: &str = "created_at";

/// A single table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a payload from an arbitrary JSON value.
    ///
    /// Objects are taken verbatim. Anything else carries no fields and
    /// becomes an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::new(),
        }
    }

    /// The record's `id`, if it holds a string one
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Set (or overwrite) the `id` field
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.0.insert(ID_FIELD.to_string(), Value::String(id.into()));
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Insert a field. An existing field keeps its position and takes the new value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in order
    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Shallow merge: every top-level field of `patch` overwrites the
    /// field of the same name here. Nested values are replaced wholesale.
    /// Fields absent from `patch` are left untouched.
    pub fn shallow_merge(&mut self, patch: Record) {
        for (field, value) in patch.0 {
            self.0.insert(field, value);
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
