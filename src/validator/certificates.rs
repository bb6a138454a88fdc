//! Certificate list validation.

use super::{AttributeBinding, AttributeValidator};
use crate::certificate::{CertificateStore, LiteralCertificateStore, check_certificates};
use crate::error::AttributeError;
use crate::record::value_as_list;
use serde_json::Value;
use std::sync::Arc;

/// Validates that every entry of a certificate attribute, `certs` by default,
/// decodes as X.509.
///
/// Entries may be inline PEM/DER or identifiers resolved through the
/// configured [`CertificateStore`]. Each undecodable entry yields one
/// `certificate_invalid` error naming that entry.
#[derive(Debug, Clone)]
pub struct CertsAreX509Validator {
    binding: AttributeBinding,
    store: Arc<dyn CertificateStore>,
}

impl CertsAreX509Validator {
    pub const NAME: &'static str = "CertsAreX509Validator";
    pub const DEFAULT_ATTRIBUTE: &'static str = "certs";

    /// Validator treating every value as literal certificate content
    pub fn new() -> Self {
        Self::with_store(Arc::new(LiteralCertificateStore))
    }

    pub fn with_store(store: Arc<dyn CertificateStore>) -> Self {
        Self {
            binding: AttributeBinding::with_default(Self::NAME, Self::DEFAULT_ATTRIBUTE),
            store,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.binding.bind(attribute);
        self
    }

    pub fn store(&self) -> &dyn CertificateStore {
        self.store.as_ref()
    }
}

impl Default for CertsAreX509Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeValidator for CertsAreX509Validator {
    fn binding(&self) -> &AttributeBinding {
        &self.binding
    }

    fn check(&self, value: &Value) -> Vec<AttributeError> {
        check_certificates(&value_as_list(value), self.store.as_ref())
            .into_iter()
            .map(AttributeError::from)
            .collect()
    }
}
