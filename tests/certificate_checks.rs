//! Certificate checker and certificate validator tests against real
//! certificate material and a file-backed store.

mod common;

use common::{CertRoot, INVALID_CERT, KNOWN_GOOD_CERT, init_logging, known_good_cert_der};
use identity_validations::certificate::{
    FileCertificateStore, LiteralCertificateStore, check_certificate, check_certificates,
    decode_certificate,
};
use identity_validations::{
    CertsAreX509Validator, ErrorCode, JsonRecord, Record, Validator, ValidationSettings,
};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_well_formed_pem_has_no_error() {
    init_logging();
    assert!(check_certificate(KNOWN_GOOD_CERT, &LiteralCertificateStore).is_ok());
    assert!(decode_certificate(KNOWN_GOOD_CERT.as_bytes()).is_ok());
}

#[test]
fn test_der_content_decodes() {
    assert!(decode_certificate(&known_good_cert_der()).is_ok());
}

#[test]
fn test_truncated_der_fails() {
    let der = known_good_cert_der();
    let message = decode_certificate(&der[..der.len() / 2]).unwrap_err();
    assert!(message.contains("X.509"), "{}", message);
}

#[test]
fn test_non_certificate_text_is_one_error_referencing_it() {
    let errors = check_certificates(&[INVALID_CERT], &LiteralCertificateStore);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reference, INVALID_CERT);
}

#[test]
fn test_one_good_one_bad_yields_one_error() {
    let errors = check_certificates(&[KNOWN_GOOD_CERT, INVALID_CERT], &LiteralCertificateStore);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reference, INVALID_CERT);

    let errors = check_certificates(&[INVALID_CERT, KNOWN_GOOD_CERT], &LiteralCertificateStore);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_validator_accepts_array() {
    let mut record = JsonRecord::from_value(
        "CertTestModel",
        json!({ "certs": [KNOWN_GOOD_CERT], "draft_certs": null }),
    );
    CertsAreX509Validator::new().validate(&mut record).unwrap();
    assert!(record.is_valid());

    let mut record = JsonRecord::from_value(
        "CertTestModel",
        json!({ "certs": [KNOWN_GOOD_CERT, INVALID_CERT], "draft_certs": null }),
    );
    CertsAreX509Validator::new().validate(&mut record).unwrap();
    let errors = record.errors().get("certs");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::CertificateInvalid);
    assert!(errors[0].message().contains("is invalid"));
    assert!(record.errors().get("draft_certs").is_empty());
}

#[test]
fn test_validator_allows_blank_entries() {
    let mut record =
        JsonRecord::from_value("CertTestModel", json!({ "certs": [KNOWN_GOOD_CERT, ""] }));
    CertsAreX509Validator::new().validate(&mut record).unwrap();
    assert!(record.is_valid());
}

#[test]
fn test_file_store_resolves_identifiers() {
    init_logging();
    let root = CertRoot::new("resolves");
    root.add("good_sp", KNOWN_GOOD_CERT);
    root.add("der_sp", known_good_cert_der());
    root.add("broken_sp", "garbage");
    let store = FileCertificateStore::under_root(root.root()).unwrap();

    assert!(check_certificates(&["good_sp", "der_sp"], &store).is_empty());

    let errors = check_certificates(&["good_sp", "broken_sp"], &store);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reference, "broken_sp");
}

#[test]
fn test_file_store_skips_unknown_identifiers() {
    let root = CertRoot::new("unknown");
    let store = FileCertificateStore::under_root(root.root()).unwrap();

    // A one-line value is taken as an identifier; with no stored file it is skipped
    assert!(check_certificates(&[INVALID_CERT], &store).is_empty());
}

#[test]
fn test_file_store_still_checks_inline_pem() {
    let root = CertRoot::new("inline");
    let store = FileCertificateStore::under_root(root.root()).unwrap();

    assert!(check_certificates(&[KNOWN_GOOD_CERT], &store).is_empty());

    let broken = "-----BEGIN CERTIFICATE-----\nbm90IGEgY2VydA==\n-----END CERTIFICATE-----";
    assert_eq!(check_certificates(&[broken], &store).len(), 1);
}

#[test]
fn test_file_store_ignores_traversal_identifiers() {
    let root = CertRoot::new("traversal");
    let store = FileCertificateStore::under_root(root.root()).unwrap();
    assert!(check_certificates(&["../../../etc/hostname"], &store).is_empty());
}

#[test]
fn test_settings_select_file_store() {
    let root = CertRoot::new("settings");
    root.add("broken_sp", "garbage");

    let settings = ValidationSettings::builder()
        .with_certificate_root(root.root())
        .build()
        .unwrap();
    let store = settings.build_certificate_store().unwrap();
    assert!(store.resolves_identifiers());

    let mut record = JsonRecord::from_value("CertTestModel", json!({ "certs": ["broken_sp"] }));
    CertsAreX509Validator::with_store(Arc::clone(&store))
        .validate(&mut record)
        .unwrap();
    assert_eq!(record.errors().get("certs").len(), 1);
}
