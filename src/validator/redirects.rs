//! Redirect URI list validation.

use super::{AttributeBinding, AttributeValidator};
use crate::error::{AttributeError, ErrorCode};
use crate::record::{is_blank, value_as_list};
use crate::uri::classify;
use serde_json::Value;

/// Validates a list of redirect URIs, `redirect_uris` by default.
///
/// Each entry is checked on its own and may produce both a `wildcard` and an
/// `invalid` error. Bare custom schemes (`myapp://`) are accepted here, unlike
/// for single endpoint URLs, because native apps register them as callbacks.
#[derive(Debug, Clone)]
pub struct AllowedRedirectsValidator {
    binding: AttributeBinding,
    stop_at_first_invalid: bool,
}

impl AllowedRedirectsValidator {
    pub const NAME: &'static str = "AllowedRedirectsValidator";
    pub const DEFAULT_ATTRIBUTE: &'static str = "redirect_uris";

    pub fn new() -> Self {
        Self {
            binding: AttributeBinding::with_default(Self::NAME, Self::DEFAULT_ATTRIBUTE),
            stop_at_first_invalid: false,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.binding.bind(attribute);
        self
    }

    /// Stop checking entries after the first one that is not acceptable.
    ///
    /// Off by default; every entry is reported.
    pub fn stop_at_first_invalid(mut self, stop: bool) -> Self {
        self.stop_at_first_invalid = stop;
        self
    }
}

impl Default for AllowedRedirectsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeValidator for AllowedRedirectsValidator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        let mut errors = Vec::new();
        if is_blank(value) {
            return errors;
        }

        for uri in value_as_list(value) {
            let classification = classify(&uri);

            if classification.has_wildcard {
                errors.push(
                    AttributeError::new(ErrorCode::Wildcard)
                        .with_message(format!("{uri} contains invalid wildcards(*)"))
                        .with_reference(uri.as_str()),
                );
            }

            if !classification.acceptable_redirect() {
                errors.push(
                    AttributeError::invalid()
                        .with_message(format!("{uri} is not a valid URI"))
                        .with_reference(uri.as_str()),
                );
                if self.stop_at_first_invalid {
                    break;
                }
            }
        }
        errors
    }
}
