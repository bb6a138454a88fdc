//! Validation settings.
//!
//! Settings are plain serde data so a hosting application can keep them next
//! to the rest of its configuration. The certificate store is chosen here,
//! once, instead of being guessed from the environment at validation time.
//!
//! ```rust
//! use identity_validations::config::ValidationSettings;
//!
//! let settings = ValidationSettings::from_json_str(r#"{
//!     "redirect_uris": { "stop_at_first_invalid": false },
//!     "endpoint_urls": { "allow_custom_scheme_only": false }
//! }"#).unwrap();
//! let profile = settings.service_provider_profile().unwrap();
//! assert_eq!(profile.len(), 8);
//! ```

use crate::certificate::{CertificateStore, FileCertificateStore, LiteralCertificateStore};
use crate::error::{ConfigurationError, ValidationResult};
use crate::profile::{ValidationProfile, service_provider_profile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where certificate identifiers are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CertificateStoreSettings {
    /// Every certificate value is literal content
    #[default]
    Literal,
    /// Identifiers resolve to `<root>/certs/sp/<identifier>.crt`
    File { root: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectSettings {
    pub stop_at_first_invalid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    pub allow_custom_scheme_only: bool,
}

/// Complete settings for building a validation profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub certificate_store: CertificateStoreSettings,
    pub redirect_uris: RedirectSettings,
    pub endpoint_urls: EndpointSettings,
}

impl ValidationSettings {
    pub fn builder() -> ValidationSettingsBuilder {
        ValidationSettingsBuilder::default()
    }

    pub fn from_json_str(json: &str) -> ValidationResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading validation settings from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Check the settings for consistency.
    pub fn validate(&self) -> ValidationResult<()> {
        if let CertificateStoreSettings::File { root } = &self.certificate_store {
            if root.as_os_str().is_empty() {
                return Err(ConfigurationError::settings(
                    "certificate store root must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// Build the configured certificate store.
    ///
    /// A file store whose directory does not exist is a configuration error.
    pub fn build_certificate_store(&self) -> ValidationResult<Arc<dyn CertificateStore>> {
        self.validate()?;
        match &self.certificate_store {
            CertificateStoreSettings::Literal => Ok(Arc::new(LiteralCertificateStore)),
            CertificateStoreSettings::File { root } => {
                let store = FileCertificateStore::under_root(root)?;
                log::debug!("using certificate directory {}", store.dir().display());
                Ok(Arc::new(store))
            }
        }
    }

    /// Build the service provider profile for these settings.
    pub fn service_provider_profile(&self) -> ValidationResult<ValidationProfile> {
        service_provider_profile(self)
    }
}

/// Builder for [`ValidationSettings`].
#[derive(Debug, Default)]
pub struct ValidationSettingsBuilder {
    settings: ValidationSettings,
}

impl ValidationSettingsBuilder {
    /// Resolve certificate identifiers under `<root>/certs/sp`
    pub fn with_certificate_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.settings.certificate_store = CertificateStoreSettings::File { root: root.into() };
        self
    }

    pub fn with_literal_certificates(mut self) -> Self {
        self.settings.certificate_store = CertificateStoreSettings::Literal;
        self
    }

    pub fn stop_redirects_at_first_invalid(mut self, stop: bool) -> Self {
        self.settings.redirect_uris.stop_at_first_invalid = stop;
        self
    }

    pub fn allow_custom_scheme_only_endpoints(mut self, allow: bool) -> Self {
        self.settings.endpoint_urls.allow_custom_scheme_only = allow;
        self
    }

    pub fn build(self) -> ValidationResult<ValidationSettings> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}
