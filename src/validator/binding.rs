//! Binding a validator to a record attribute.

use crate::error::{ConfigurationError, ValidationResult};
use crate::record::Record;
use serde_json::Value;

/// The attribute a validator checks.
///
/// A binding is either created with a default attribute (`certs` for the
/// certificate validator) or left unbound until
/// [`bind`](AttributeBinding::bind) is called. Running an unbound validator,
/// or one bound to a field the record does not have, is a
/// [`ConfigurationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    validator: &'static str,
    attribute: Option<String>,
}

impl AttributeBinding {
    /// A binding with no attribute yet, for validators that have no natural default
    pub fn unbound(validator: &'static str) -> Self {
        Self {
            validator,
            attribute: None,
        }
    }

    /// A binding that starts out on `attribute`; [`bind`](Self::bind) replaces it
    pub fn with_default(validator: &'static str, attribute: impl Into<String>) -> Self {
        Self {
            validator,
            attribute: Some(attribute.into()),
        }
    }

    /// Point the binding at `attribute`, replacing any earlier one
    pub fn bind(&mut self, attribute: impl Into<String>) {
        self.attribute = Some(attribute.into());
    }

    /// Name of the owning validator, used in configuration errors
    pub fn validator(&self) -> &'static str {
        self.validator
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// The bound attribute name, checked against `record`.
    pub fn attribute_for(&self, record: &dyn Record) -> ValidationResult<&str> {
        let attribute = self
            .attribute
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConfigurationError::missing_attribute(self.validator, record.type_name()))?;

        if !record.has_field(attribute) {
            return Err(ConfigurationError::unknown_attribute(
                self.validator,
                attribute,
                record.type_name(),
            ));
        }
        Ok(attribute)
    }

    /// The bound attribute name together with its current value.
    pub fn resolve(&self, record: &dyn Record) -> ValidationResult<(&str, Value)> {
        let attribute = self.attribute_for(record)?;
        Ok((attribute, record.field(attribute)))
    }
}
