//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::STANDARD};
use identity_validations::ServiceProvider;
use std::path::{Path, PathBuf};

/// A well-formed PEM certificate.
pub const KNOWN_GOOD_CERT: &str = include_str!("../fixtures/sp_cert.pem");

pub const INVALID_CERT: &str = "this is not a valid certificate";

/// The fixture certificate as raw DER bytes.
pub fn known_good_cert_der() -> Vec<u8> {
    let body: String = KNOWN_GOOD_CERT
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .collect();
    STANDARD.decode(body).expect("fixture certificate is valid base64")
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A service provider that passes every rule of the default profile.
pub fn valid_service_provider() -> ServiceProvider {
    let mut sp = ServiceProvider::new("Test SP", "test_issuer");
    sp.ial = Some(1);
    sp.redirect_uris = vec![
        "http://example.com/redirect1".to_string(),
        "https://example.com/redirect2".to_string(),
        "example-app:/redirect3".to_string(),
    ];
    sp.failure_to_proof_url = Some("https://example.com/failure_to_proof".to_string());
    sp.push_notification_url = Some("https://example.com/push_notification".to_string());
    sp.certs = vec![String::new()];
    sp
}

/// A hosting root with an empty `certs/sp` directory, removed on drop.
pub struct CertRoot {
    root: PathBuf,
}

impl CertRoot {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "identity-validations-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("certs/sp")).expect("create certificate directory");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cert_dir(&self) -> PathBuf {
        self.root.join("certs/sp")
    }

    /// Store `content` as `<identifier>.crt`
    pub fn add(&self, identifier: &str, content: impl AsRef<[u8]>) {
        std::fs::write(self.cert_dir().join(format!("{identifier}.crt")), content)
            .expect("write certificate fixture");
    }
}

impl Drop for CertRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
