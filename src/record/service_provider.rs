//! Service provider registration record.

use super::Record;
use crate::error::Errors;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

/// A registered client of the identity federation.
///
/// ```rust
/// use identity_validations::record::{Record, ServiceProvider};
/// use serde_json::json;
///
/// let sp: ServiceProvider = serde_json::from_value(json!({
///     "friendly_name": "Test SP",
///     "issuer": "urn:gov:gsa:openidconnect:test",
///     "redirect_uris": ["https://example.com/auth/result"]
/// })).unwrap();
/// assert!(sp.has_field("redirect_uris"));
/// assert_eq!(sp.field("ial"), serde_json::Value::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProvider {
    pub friendly_name: Option<String>,
    pub issuer: Option<String>,
    pub ial: Option<i64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub redirect_uris: Vec<String>,
    pub failure_to_proof_url: Option<String>,
    pub push_notification_url: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub certs: Vec<String>,
    #[serde(skip)]
    errors: Errors,
}

impl ServiceProvider {
    pub const TYPE_NAME: &'static str = "ServiceProvider";

    pub const FIELDS: [&'static str; 7] = [
        "friendly_name",
        "issuer",
        "ial",
        "redirect_uris",
        "failure_to_proof_url",
        "push_notification_url",
        "certs",
    ];

    pub fn new(friendly_name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            friendly_name: Some(friendly_name.into()),
            issuer: Some(issuer.into()),
            ..Self::default()
        }
    }
}

/// Lists may be sent as `null`, which reads the same as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record for ServiceProvider {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn has_field(&self, name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }

    fn field(&self, name: &str) -> Value {
        match name {
            "friendly_name" => json!(self.friendly_name),
            "issuer" => json!(self.issuer),
            "ial" => json!(self.ial),
            "redirect_uris" => json!(self.redirect_uris),
            "failure_to_proof_url" => json!(self.failure_to_proof_url),
            "push_notification_url" => json!(self.push_notification_url),
            "certs" => json!(self.certs),
            _ => Value::Null,
        }
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}
