//! The minimal contract a validated record must offer.
//!
//! Validators never know the concrete record type. They ask whether a field
//! exists, read its value as JSON, and append errors. Anything that can do
//! those three things can be validated, whether it is a typed struct such as
//! [`ServiceProvider`] or a loosely shaped [`JsonRecord`].

pub mod json;
pub mod service_provider;

pub use json::JsonRecord;
pub use service_provider::ServiceProvider;

use crate::error::{AttributeError, Errors};
use serde_json::Value;

/// A record whose attributes can be validated.
pub trait Record {
    /// Name used in configuration error messages
    fn type_name(&self) -> &str;

    /// Whether `name` is a readable field of this record
    fn has_field(&self, name: &str) -> bool;

    /// Current value of `name`, `Value::Null` when unset or unknown
    fn field(&self, name: &str) -> Value;

    fn errors(&self) -> &Errors;

    fn errors_mut(&mut self) -> &mut Errors;

    fn add_error(&mut self, attribute: &str, error: AttributeError) {
        self.errors_mut().add(attribute, error);
    }

    /// Valid when no errors are recorded; does not run validation
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Whether a value counts as absent: null, a whitespace-only string, or an
/// empty array or object. `[""]` is not blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// View a scalar-or-list value as a list of strings. Null becomes an empty
/// list; non-string entries are rendered as JSON text.
pub fn value_as_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_as_string).collect(),
        other => vec![value_as_string(other)],
    }
}

/// Render a value as the string a validator inspects.
pub fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
