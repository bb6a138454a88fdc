//! Error types for service provider validation.
//!
//! Two classes of failure exist and they never mix:
//!
//! - [`ConfigurationError`] is a programming or deployment mistake (a validator
//!   wired to a field that does not exist, a certificate directory that is
//!   missing). It is returned as `Err` and halts the current validation run.
//! - [`AttributeError`] is a data problem with the record being validated. It
//!   is appended to the record's [`Errors`] and never returned as `Err`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Programmer-facing errors raised while wiring or running validators.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The validator was run without ever being bound to an attribute
    #[error("{validator}: can't validate {record_type}, no attribute specified")]
    MissingAttribute {
        validator: String,
        record_type: String,
    },

    /// The bound attribute is not a readable field on the record
    #[error("{validator}: attribute '{attribute}' not found in class {record_type}")]
    UnknownAttribute {
        validator: String,
        attribute: String,
        record_type: String,
    },

    /// The configured certificate store cannot be used
    #[error("Certificate store at '{}' is unusable: {reason}", .path.display())]
    CertificateStore { path: PathBuf, reason: String },

    /// Settings failed their own consistency checks
    #[error("Invalid settings: {message}")]
    Settings { message: String },

    /// Settings could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigurationError {
    /// Create a missing attribute error
    pub fn missing_attribute(validator: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self::MissingAttribute {
            validator: validator.into(),
            record_type: record_type.into(),
        }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(
        validator: impl Into<String>,
        attribute: impl Into<String>,
        record_type: impl Into<String>,
    ) -> Self {
        Self::UnknownAttribute {
            validator: validator.into(),
            attribute: attribute.into(),
            record_type: record_type.into(),
        }
    }

    /// Create a certificate store error
    pub fn certificate_store(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CertificateStore {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }
}

/// A certificate entry that could not be decoded.
///
/// Returned by [`check_certificates`](crate::certificate::check_certificates);
/// `reference` is the value exactly as it appeared on the record, so a caller
/// can tell which entry of a list failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reference} is invalid - {message}")]
pub struct CertificateError {
    pub reference: String,
    pub message: String,
}

impl CertificateError {
    /// Create a certificate error for the entry `reference`
    pub fn new(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            message: message.into(),
        }
    }
}

/// Stable identifier for each kind of data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Invalid,
    Wildcard,
    CertificateInvalid,
    Blank,
    Inclusion,
}

impl ErrorCode {
    /// Stable snake_case identifier, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Wildcard => "wildcard",
            Self::CertificateInvalid => "certificate_invalid",
            Self::Blank => "blank",
            Self::Inclusion => "inclusion",
        }
    }

    /// Message used when an error is added without one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Invalid => "is invalid",
            Self::Wildcard => "contains invalid wildcards(*)",
            Self::CertificateInvalid => "is not a valid certificate",
            Self::Blank => "can't be blank",
            Self::Inclusion => "is not included in the list",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-facing problem with one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeError {
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The list entry the error is about, when the attribute holds several
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl AttributeError {
    /// Create an error with the code's default message and no reference
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            reference: None,
        }
    }

    /// Create a generic `invalid` error
    pub fn invalid() -> Self {
        Self::new(ErrorCode::Invalid)
    }

    /// Replace the default message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the list entry the error is about
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// The explicit message, or the code's default one
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.code.default_message())
    }
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<CertificateError> for AttributeError {
    fn from(error: CertificateError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::CertificateInvalid)
            .with_message(message)
            .with_reference(error.reference)
    }
}

/// Per-record error collection, keyed by attribute name.
///
/// Errors for one attribute keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors {
    by_attribute: BTreeMap<String, Vec<AttributeError>>,
}

impl Errors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `error` to the errors for `attribute`
    pub fn add(&mut self, attribute: impl Into<String>, error: AttributeError) {
        self.by_attribute
            .entry(attribute.into())
            .or_default()
            .push(error);
    }

    /// Errors recorded for `attribute`, empty if there are none
    pub fn get(&self, attribute: &str) -> &[AttributeError] {
        self.by_attribute
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Human-readable messages for `attribute`
    pub fn messages(&self, attribute: &str) -> Vec<String> {
        self.get(attribute).iter().map(|e| e.message().to_string()).collect()
    }

    /// Whether `attribute` has at least one error with `code`
    pub fn has_code(&self, attribute: &str, code: ErrorCode) -> bool {
        self.get(attribute).iter().any(|e| e.code == code)
    }

    /// Whether no attribute has any error
    pub fn is_empty(&self) -> bool {
        self.by_attribute.values().all(Vec::is_empty)
    }

    /// Total number of errors across all attributes
    pub fn len(&self) -> usize {
        self.by_attribute.values().map(Vec::len).sum()
    }

    /// Remove every error
    pub fn clear(&mut self) {
        self.by_attribute.clear();
    }

    /// Attributes with at least one error, in name order
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.by_attribute
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// Every error paired with its attribute, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeError)> {
        self.by_attribute
            .iter()
            .flat_map(|(name, errors)| errors.iter().map(move |e| (name.as_str(), e)))
    }
}

pub type ValidationResult<T> = Result<T, ConfigurationError>;
