//! Single endpoint URL validation.

use super::{AttributeBinding, AttributeValidator};
use crate::error::AttributeError;
use crate::record::{is_blank, value_as_string};
use crate::uri::classify;
use serde_json::Value;

/// Validates one URL-valued attribute such as `failure_to_proof_url`.
///
/// Has no default attribute; one must be given with
/// [`for_attribute`](UriValidator::for_attribute) or
/// [`with_attribute`](UriValidator::with_attribute).
#[derive(Debug, Clone)]
pub struct UriValidator {
    binding: AttributeBinding,
    allow_custom_scheme_only: bool,
}

impl UriValidator {
    pub const NAME: &'static str = "UriValidator";

    /// An unbound validator; running it before binding is a configuration error
    pub fn new() -> Self {
        Self {
            binding: AttributeBinding::unbound(Self::NAME),
            allow_custom_scheme_only: false,
        }
    }

    /// A validator bound to `attribute`
    pub fn for_attribute(attribute: impl Into<String>) -> Self {
        Self::new().with_attribute(attribute)
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.binding.bind(attribute);
        self
    }

    /// Also accept bare custom schemes such as `myapp://`
    pub fn allow_custom_scheme_only(mut self, allow: bool) -> Self {
        self.allow_custom_scheme_only = allow;
        self
    }
}

impl Default for UriValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeValidator for UriValidator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        if is_blank(value) {
            return Vec::new();
        }

        let accepted = match value {
            Value::String(raw) => {
                let classification = classify(raw);
                classification.valid()
                    || (self.allow_custom_scheme_only && classification.custom_scheme_only)
            }
            _ => false,
        };

        if accepted {
            Vec::new()
        } else {
            vec![AttributeError::invalid().with_reference(value_as_string(value))]
        }
    }
}
