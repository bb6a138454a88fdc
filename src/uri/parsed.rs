//! Generic-syntax URI splitting.
//!
//! Syntax is checked with [`url::Url::parse`] after a strict character pass,
//! since the WHATWG parser percent-encodes spaces and other characters RFC 3986
//! rejects. The parts handed to the classifier are read from the raw text: the
//! parsed `Url` is normalized (`http:///path` gains the host `path`,
//! `https:example.com` gains an authority) and nothing here is normalized.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// RFC 3986 appendix B. Matches every string, so it only splits.
static COMPONENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI component pattern is valid")
});

/// Parts of a URI that survived syntax checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: Option<String>,
    /// Present, possibly empty, whenever the URI has a `//` authority
    pub host: Option<String>,
    /// Hierarchical path. Empty for opaque URIs such as `urn:foo:bar`.
    pub path: String,
    /// Everything after `scheme:` when it neither starts an authority nor a
    /// rooted path
    pub opaque: Option<String>,
}

/// A raw string after an attempt to split it as a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUri {
    Parsed(UriParts),
    Unparseable,
}

impl ParsedUri {
    /// Split `raw` into its parts, or mark it unparseable. Never panics.
    pub fn parse(raw: &str) -> Self {
        match split(raw) {
            Some(parts) => Self::Parsed(parts),
            None => Self::Unparseable,
        }
    }

    /// Whether the string passed syntax checking
    pub fn is_parseable(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// The split parts, if the string parsed
    pub fn parts(&self) -> Option<&UriParts> {
        match self {
            Self::Parsed(parts) => Some(parts),
            Self::Unparseable => None,
        }
    }

    /// Scheme exactly as written, without the trailing `:`
    pub fn scheme(&self) -> Option<&str> {
        self.parts().and_then(|p| p.scheme.as_deref())
    }

    /// Host of the authority, without userinfo or port
    pub fn host(&self) -> Option<&str> {
        self.parts().and_then(|p| p.host.as_deref())
    }

    /// Hierarchical path; `Some("")` for opaque URIs
    pub fn path(&self) -> Option<&str> {
        self.parts().map(|p| p.path.as_str())
    }

    /// Opaque part of a non-hierarchical URI
    pub fn opaque(&self) -> Option<&str> {
        self.parts().and_then(|p| p.opaque.as_deref())
    }
}

fn split(raw: &str) -> Option<UriParts> {
    // Without a scheme delimiter there is nothing to classify; treat the whole
    // string as a scheme-less reference.
    if !raw.contains(':') {
        return Some(UriParts {
            scheme: None,
            host: None,
            path: raw.to_string(),
            opaque: None,
        });
    }

    if !raw.chars().all(is_uri_char) || !percent_encoding_ok(raw) {
        return None;
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            log::trace!("'{}' is not a URI: {}", raw, e);
            return None;
        }
    };

    let captures = COMPONENTS_RE.captures(raw)?;
    let scheme = captures.get(1)?.as_str();
    let authority = captures.get(2).map(|m| m.as_str());
    let rest = captures.get(3).map_or("", |m| m.as_str());

    let mut outside_authority = [
        Some(rest),
        captures.get(4).map(|m| m.as_str()),
        captures.get(5).map(|m| m.as_str()),
    ]
    .into_iter()
    .flatten();
    if outside_authority.any(|part| part.contains(['[', ']'])) {
        return None;
    }

    let host = authority.map(|authority| {
        if authority.is_empty() {
            String::new()
        } else {
            url.host_str().unwrap_or_default().to_string()
        }
    });

    let (path, opaque) = if authority.is_some() || rest.starts_with('/') {
        (rest.to_string(), None)
    } else {
        (String::new(), Some(rest.to_string()))
    };

    Some(UriParts {
        scheme: Some(scheme.to_string()),
        host,
        path,
        opaque,
    })
}

/// Unreserved, reserved and `%`.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&'
                | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
        )
}

fn percent_encoding_ok(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
