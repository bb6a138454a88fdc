//! Validation profiles: ordered validator lists applied to a record type.

use crate::config::ValidationSettings;
use crate::error::ValidationResult;
use crate::validator::{
    AllowedRedirectsValidator, CertsAreX509Validator, FormatValidator, InclusionValidator,
    PresenceValidator, UriValidator, Validator,
};
use crate::record::Record;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Issuers may be any string without whitespace.
static ISSUER_FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("issuer pattern is valid"));

/// Validators run in the order they were added.
#[derive(Debug, Default)]
pub struct ValidationProfile {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator, builder style
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.add(validator);
        self
    }

    pub fn add(&mut self, validator: impl Validator + 'static) {
        self.validators.push(Box::new(validator));
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Validators in run order
    pub fn validators(&self) -> impl Iterator<Item = &(dyn Validator + 'static)> {
        self.validators.iter().map(|v| v.as_ref())
    }

    /// Clear the record's errors and run every validator against it.
    ///
    /// Returns whether the record ended up without errors. A configuration
    /// error stops the run at the offending validator and leaves the record
    /// with no errors at all, not the partial set from validators that ran
    /// before it.
    pub fn validate(&self, record: &mut dyn Record) -> ValidationResult<bool> {
        record.errors_mut().clear();
        for validator in &self.validators {
            if let Err(e) = validator.validate(record) {
                record.errors_mut().clear();
                log::warn!("{} stopped validating {}: {}", validator.name(), record.type_name(), e);
                return Err(e);
            }
        }

        let valid = record.is_valid();
        log::debug!(
            "validated {} with {} validator(s): {}",
            record.type_name(),
            self.validators.len(),
            if valid { "valid" } else { "invalid" }
        );
        Ok(valid)
    }
}

/// The rules applied to every service provider registration.
pub fn service_provider_profile(settings: &ValidationSettings) -> ValidationResult<ValidationProfile> {
    let store = settings.build_certificate_store()?;

    Ok(ValidationProfile::new()
        .with(PresenceValidator::for_attribute("friendly_name"))
        .with(PresenceValidator::for_attribute("issuer"))
        .with(FormatValidator::new("issuer", ISSUER_FORMAT_RE.clone()))
        .with(InclusionValidator::new("ial", vec![json!(1), json!(2)]))
        .with(
            AllowedRedirectsValidator::new()
                .stop_at_first_invalid(settings.redirect_uris.stop_at_first_invalid),
        )
        .with(
            UriValidator::for_attribute("failure_to_proof_url")
                .allow_custom_scheme_only(settings.endpoint_urls.allow_custom_scheme_only),
        )
        .with(
            UriValidator::for_attribute("push_notification_url")
                .allow_custom_scheme_only(settings.endpoint_urls.allow_custom_scheme_only),
        )
        .with(CertsAreX509Validator::with_store(store)))
}
