//! A record backed by a JSON object.

use super::Record;
use crate::error::Errors;
use serde_json::{Map, Value};

/// Record whose fields are the keys of a JSON object.
///
/// A key that is present with a `null` value is a field that is unset; a key
/// that is absent is not a field at all.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    type_name: String,
    attributes: Map<String, Value>,
    errors: Errors,
}

impl JsonRecord {
    pub fn new(type_name: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes,
            errors: Errors::new(),
        }
    }

    /// Build from any JSON value; non-objects yield a record with no fields.
    pub fn from_value(type_name: impl Into<String>, value: Value) -> Self {
        let attributes = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(type_name, attributes)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl Record for JsonRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn has_field(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn field(&self, name: &str) -> Value {
        self.attributes.get(name).cloned().unwrap_or(Value::Null)
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}
