//! Attribute-scoped validators.
//!
//! Every validator in this crate checks exactly one attribute of a record.
//! The attribute is named by an [`AttributeBinding`], resolved against the
//! record each time the validator runs, so one validator instance can be
//! shared across any number of records.
//!
//! Implementing [`AttributeValidator`] is enough to get a [`Validator`]: the
//! blanket implementation resolves the binding, hands the value to
//! [`AttributeValidator::check`] and files the returned errors under the
//! bound attribute.

pub mod binding;
pub mod certificates;
pub mod field;
pub mod redirects;
pub mod uri;

pub use binding::AttributeBinding;
pub use certificates::CertsAreX509Validator;
pub use field::{FormatValidator, InclusionValidator, PresenceValidator};
pub use redirects::AllowedRedirectsValidator;
pub use uri::UriValidator;

use crate::error::{AttributeError, ValidationResult};
use crate::record::Record;
use serde_json::Value;
use std::fmt::Debug;

/// Anything that can validate a record.
pub trait Validator: Debug + Send + Sync {
    /// Name used in configuration error messages
    fn name(&self) -> &str;

    /// Validate `record`, appending data errors to it.
    ///
    /// `Err` is reserved for configuration mistakes; invalid data never
    /// produces one.
    fn validate(&self, record: &mut dyn Record) -> ValidationResult<()>;
}

/// A validator of a single bound attribute.
pub trait AttributeValidator: Debug + Send + Sync {
    fn binding(&self) -> &AttributeBinding;

    /// Errors for one attribute value, in the order they should be reported
    fn check(&self, value: &Value) -> Vec<AttributeError>;
}

impl<T: AttributeValidator> Validator for T {
    fn name(&self) -> &str {
        self.binding().validator()
    }

    fn validate(&self, record: &mut dyn Record) -> ValidationResult<()> {
        let (attribute, value) = self.binding().resolve(&*record)?;
        let errors = self.check(&value);

        if !errors.is_empty() {
            log::debug!(
                "{} found {} error(s) on {}.{}",
                self.name(),
                errors.len(),
                record.type_name(),
                attribute
            );
        }
        for error in errors {
            record.add_error(attribute, error);
        }
        Ok(())
    }
}
