//! URI classification.
//!
//! A [`UriClassification`] is a set of independent facts about a URI. The facts
//! are not mutually exclusive: `myapp://*/path` is at the same time custom,
//! native, wildcarded and valid. Callers combine them to decide acceptability;
//! the two combinations used in this crate are [`UriClassification::valid`] for
//! single endpoint URLs and `valid() || custom_scheme_only` for redirect URIs.

use super::parsed::ParsedUri;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Schemes that may never be registered, matched as a case-insensitive prefix.
static UNSUPPORTED_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(s?ftp|ldaps?|file|mailto)").expect("unsupported scheme pattern is valid")
});

/// Facts derived from one raw URI string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriClassification {
    pub parseable: bool,
    pub unsupported: bool,
    /// http(s) with a host
    pub web: bool,
    /// Any scheme with a non-empty hierarchical path, so that app links such
    /// as `myapp:///callback` qualify. Opaque parts (`urn:foo:bar`) never count.
    pub native: bool,
    /// Any scheme with a non-empty host
    pub custom: bool,
    pub has_wildcard: bool,
    /// A non-http(s), supported scheme, whatever follows it
    pub custom_scheme_only: bool,
}

impl UriClassification {
    fn unparseable() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn valid(&self) -> bool {
        !self.unsupported && (self.web || self.native || self.custom)
    }

    /// Whether a redirect URI with these facts is acceptable
    pub fn acceptable_redirect(&self) -> bool {
        self.valid() || self.custom_scheme_only
    }
}

/// Classify a raw URI string. Never fails; malformed input is `unsupported`.
pub fn classify(raw: &str) -> UriClassification {
    let parsed = ParsedUri::parse(raw);
    let classification = classify_parsed(&parsed, raw);
    log::trace!("classified '{}' as {:?}", raw, classification);
    classification
}

/// Classify an already parsed URI. `raw` is the unparsed input, used only
/// for the wildcard check.
pub fn classify_parsed(parsed: &ParsedUri, raw: &str) -> UriClassification {
    let Some(parts) = parsed.parts() else {
        return UriClassification::unparseable();
    };

    let scheme = parts.scheme.as_deref().unwrap_or("");
    let has_scheme = !scheme.is_empty();
    let has_host = parts.host.as_deref().is_some_and(|h| !h.is_empty());
    let has_path = !parts.path.is_empty();
    let http = is_http(scheme);
    let unsupported = UNSUPPORTED_SCHEME_RE.is_match(scheme);

    UriClassification {
        parseable: true,
        unsupported,
        web: http && has_host,
        native: has_scheme && has_path,
        custom: has_scheme && has_host,
        has_wildcard: raw.contains('*'),
        custom_scheme_only: !unsupported && has_scheme && !http,
    }
}

fn is_http(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}
