//! Certificate content resolution.
//!
//! A certificate attribute may hold the certificate itself or a short
//! identifier naming a file in the hosting application's certificate
//! directory. Which of the two applies is decided by the [`CertificateStore`]
//! chosen at configuration time.

use crate::error::{ConfigurationError, ValidationResult};
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

/// Directory, relative to the hosting application's root, holding
/// service provider certificates.
pub const SERVICE_PROVIDER_CERT_DIR: &str = "certs/sp";

/// File extension of stored certificates.
pub const CERT_EXTENSION: &str = "crt";

/// Source of certificate content for symbolic identifiers.
pub trait CertificateStore: Debug + Send + Sync {
    /// Whether identifiers should be looked up at all. When `false` every value
    /// is treated as literal certificate content.
    fn resolves_identifiers(&self) -> bool;

    /// Content stored under `identifier`, or `None` if nothing is stored.
    fn resolve(&self, identifier: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Store used when no certificate directory exists: values are always literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralCertificateStore;

impl CertificateStore for LiteralCertificateStore {
    fn resolves_identifiers(&self) -> bool {
        false
    }

    fn resolve(&self, _identifier: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Store reading `<dir>/<identifier>.crt`.
#[derive(Debug, Clone)]
pub struct FileCertificateStore {
    dir: PathBuf,
}

impl FileCertificateStore {
    /// Use `dir` as the certificate directory. The directory is not checked.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Use `<root>/certs/sp`, failing if it is not a directory.
    pub fn under_root(root: impl AsRef<Path>) -> ValidationResult<Self> {
        let dir = root.as_ref().join(SERVICE_PROVIDER_CERT_DIR);
        if !dir.is_dir() {
            return Err(ConfigurationError::certificate_store(
                dir,
                "directory does not exist",
            ));
        }
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an identifier resolves to, or `None` if the identifier could
    /// escape the directory.
    pub fn path_for(&self, identifier: &str) -> Option<PathBuf> {
        if identifier.is_empty()
            || identifier.contains(['/', '\\', '\0'])
            || identifier == "."
            || identifier == ".."
        {
            return None;
        }
        Some(self.dir.join(format!("{identifier}.{CERT_EXTENSION}")))
    }
}

impl CertificateStore for FileCertificateStore {
    fn resolves_identifiers(&self) -> bool {
        true
    }

    fn resolve(&self, identifier: &str) -> io::Result<Option<Vec<u8>>> {
        let Some(path) = self.path_for(identifier) else {
            log::warn!(
                "refusing certificate identifier '{}' containing path separators",
                identifier
            );
            return Ok(None);
        };

        match std::fs::read(&path) {
            Ok(content) => {
                log::debug!("resolved certificate '{}' from {}", identifier, path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                log::warn!("could not read certificate {}: {}", path.display(), e);
                Err(e)
            }
        }
    }
}
