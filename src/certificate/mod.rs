//! Certificate resolution and X.509 decoding.

pub mod checker;
pub mod store;

pub use checker::{check_certificate, check_certificates, decode_certificate, is_identifier};
pub use store::{CertificateStore, FileCertificateStore, LiteralCertificateStore};
