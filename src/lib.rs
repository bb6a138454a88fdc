//! Validation engine for identity-federation service provider registrations.
//!
//! Checks the registration data a SAML/OIDC client submits before it is
//! stored: redirect URIs, endpoint URLs and X.509 client certificates.
//!
//! # Core Components
//!
//! - [`uri::classify`] - Classifies a raw URI into web/native/custom facts
//! - [`certificate::check_certificates`] - Decodes inline or stored certificates
//! - [`Validator`] - Attribute-scoped validators that write into a [`Record`]
//! - [`ValidationProfile`] - Ordered validators for one record type
//!
//! # Quick Start
//!
//! ```rust
//! use identity_validations::{ServiceProvider, ValidationSettings};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ValidationSettings::default().service_provider_profile()?;
//!
//! let mut sp = ServiceProvider::new("Test SP", "urn:gov:gsa:openidconnect:test");
//! sp.redirect_uris = vec!["https://example.com/cb".into(), "foo".into()];
//!
//! assert!(!profile.validate(&mut sp)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod certificate;
pub mod config;
pub mod error;
pub mod profile;
pub mod record;
pub mod uri;
pub mod validator;

pub use certificate::{CertificateStore, FileCertificateStore, LiteralCertificateStore};
pub use config::ValidationSettings;
pub use error::{
    AttributeError, CertificateError, ConfigurationError, ErrorCode, Errors, ValidationResult,
};
pub use profile::{ValidationProfile, service_provider_profile};
pub use record::{JsonRecord, Record, ServiceProvider};
pub use uri::{UriClassification, classify};
pub use validator::{
    AllowedRedirectsValidator, AttributeValidator, CertsAreX509Validator, UriValidator, Validator,
};
