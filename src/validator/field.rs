//! Plain field-level checks: presence, format and inclusion.

use super::{AttributeBinding, AttributeValidator};
use crate::error::{AttributeError, ErrorCode};
use crate::record::{is_blank, value_as_string};
use regex::Regex;
use serde_json::Value;

/// Requires a non-blank value.
#[derive(Debug, Clone)]
pub struct PresenceValidator {
    binding: AttributeBinding,
}

impl PresenceValidator {
    pub const NAME: &'static str = "PresenceValidator";

    pub fn for_attribute(attribute: impl Into<String>) -> Self {
        Self {
            binding: AttributeBinding::with_default(Self::NAME, attribute),
        }
    }
}

impl AttributeValidator for PresenceValidator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        if is_blank(value) {
            vec![AttributeError::new(ErrorCode::Blank)]
        } else {
            Vec::new()
        }
    }
}

/// Requires a present value to match a pattern. Blank values are left to
/// [`PresenceValidator`].
#[derive(Debug, Clone)]
pub struct FormatValidator {
    binding: AttributeBinding,
    pattern: Regex,
}

impl FormatValidator {
    pub const NAME: &'static str = "FormatValidator";

    pub fn new(attribute: impl Into<String>, pattern: Regex) -> Self {
        Self {
            binding: AttributeBinding::with_default(Self::NAME, attribute),
            pattern,
        }
    }
}

impl AttributeValidator for FormatValidator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        if is_blank(value) || self.pattern.is_match(&value_as_string(value)) {
            Vec::new()
        } else {
            vec![AttributeError::invalid()]
        }
    }
}

/// Requires a present value to be one of a fixed set. Null is allowed.
#[derive(Debug, Clone)]
pub struct InclusionValidator {
    binding: AttributeBinding,
    allowed: Vec<Value>,
}

impl InclusionValidator {
    pub const NAME: &'static str = "InclusionValidator";

    pub fn new(attribute: impl Into<String>, allowed: Vec<Value>) -> Self {
        Self {
            binding: AttributeBinding::with_default(Self::NAME, attribute),
            allowed,
        }
    }
}

impl AttributeValidator for InclusionValidator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        if value.is_null() || self.allowed.contains(value) {
            Vec::new()
        } else {
            vec![AttributeError::new(ErrorCode::Inclusion).with_reference(value_as_string(value))]
        }
    }
}
