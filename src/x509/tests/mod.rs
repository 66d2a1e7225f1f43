// Copyright (C) Microsoft Corporation. All rights reserved.

use chrono::TimeZone;
use test_log::test;

use super::*;

/// Self-signed ECDSA P-256 certificate, CN "botan-safe test", O "Example Org",
/// SAN test.example.com, key usage digitalSignature + keyCertSign.
const SELF_SIGNED_PEM: &[u8] = include_bytes!("self_signed_p256.pem");

const SUBJECT_KEY_ID: &str = "1142fc3b81b0473aa2e95a4307e16c166cd92f39";

const SPKI_DER_HEX: &str = "3059301306072a8648ce3d020106082a8648ce3d03010703420004c979f73b7d0ccc3b\
adbd7a5efa5a59780bf8a8a264f7e96ac5bc0f3fa665a6ae83d173b2a3f4e945c664a86cd0e29d316cf2cb1cfd8aa\
f88b295c37fd293cc8c";

const SHA256_FINGERPRINT: &str = "27:D3:EF:59:7F:2C:BB:38:89:05:D1:DC:D5:E8:CD:71:\
E6:B3:F9:AB:E0:13:F6:EE:D6:94:75:95:25:23:1A:10";

fn load() -> Certificate {
    Certificate::load(SELF_SIGNED_PEM).expect("load certificate")
}

#[test]
fn test_cert_validity_period() {
    let cert = load();
    assert_eq!(cert.time_starts().expect("time_starts"), "240101000000Z");
    assert_eq!(cert.time_expires().expect("time_expires"), "340101000000Z");
    assert_eq!(
        cert.not_before().expect("not_before"),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time")
    );
    assert_eq!(
        cert.not_after().expect("not_after"),
        Utc.with_ymd_and_hms(2034, 1, 1, 0, 0, 0).single().expect("valid time")
    );
}

#[test]
fn test_cert_fingerprint() {
    let cert = load();
    assert_eq!(cert.fingerprint("SHA-256").expect("fingerprint"), SHA256_FINGERPRINT);
}

#[test]
fn test_cert_serial_and_key_ids() {
    let cert = load();
    assert_eq!(cert.serial_number().expect("serial"), vec![0x12, 0x34, 0xAB, 0xCD]);
    assert_eq!(hex::encode(cert.subject_key_id().expect("ski")), SUBJECT_KEY_ID);
    assert_eq!(hex::encode(cert.authority_key_id().expect("aki")), SUBJECT_KEY_ID);
}

#[test]
fn test_cert_public_key() {
    let cert = load();
    let spki = hex::decode(SPKI_DER_HEX).expect("hex");

    let bits = cert.public_key_bits().expect("public key bits");
    assert!(!bits.is_empty());
    assert!(spki.windows(bits.len()).any(|window| window == bits.as_slice()));

    let key = cert.public_key().expect("public key");
    assert_eq!(key.algo_name().expect("algo"), "ECDSA");
    assert_eq!(key.export_der().expect("export"), spki);
}

#[test]
fn test_cert_dn_fields() {
    let cert = load();
    assert_eq!(cert.subject_info("Name", 0).expect("subject CN"), "botan-safe test");
    assert_eq!(
        cert.subject_info("Organization", 0).expect("subject O"),
        "Example Org"
    );
    assert_eq!(cert.issuer_info("Name", 0).expect("issuer CN"), "botan-safe test");
}

#[test]
fn test_cert_hostname_and_usage() {
    let cert = load();
    assert_eq!(
        cert.matches_hostname("test.example.com").expect("hostname"),
        VerificationOutcome::Valid
    );
    assert_eq!(
        cert.matches_hostname("other.example.org").expect("hostname"),
        VerificationOutcome::Invalid
    );

    assert_eq!(
        cert.allowed_usage(KeyUsage::DIGITAL_SIGNATURE).expect("usage"),
        VerificationOutcome::Valid
    );
    assert_eq!(
        cert.allowed_usage(KeyUsage::DIGITAL_SIGNATURE | KeyUsage::KEY_CERT_SIGN)
            .expect("usage"),
        VerificationOutcome::Valid
    );
    assert_eq!(
        cert.allowed_usage(KeyUsage::KEY_ENCIPHERMENT).expect("usage"),
        VerificationOutcome::Invalid
    );
}

#[test]
fn test_cert_to_text() {
    let cert = load();
    let text = cert.to_text().expect("to_text");
    assert!(text.contains("botan-safe test"));
    assert!(!text.contains('\0'));
    assert_eq!(cert.to_string(), text);
}

#[test]
fn test_cert_load_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    std::io::Write::write_all(&mut file, SELF_SIGNED_PEM).expect("write pem");

    let cert = Certificate::load_file(file.path()).expect("load file");
    assert_eq!(cert.serial_number().expect("serial"), vec![0x12, 0x34, 0xAB, 0xCD]);
}

#[test]
fn test_cert_malformed_input() {
    assert!(matches!(
        Certificate::load(&[]),
        Err(BotanError::MalformedInput { .. })
    ));
    assert!(matches!(
        Certificate::load(b"-----BEGIN CERTIFICATE-----\ngarbage\n"),
        Err(BotanError::CreationFailed {
            function: "botan_x509_cert_load",
            ..
        })
    ));
}

#[test]
fn test_cert_close() {
    let mut cert = load();
    cert.close().expect("close");
    assert!(matches!(
        cert.serial_number(),
        Err(BotanError::InvalidHandleState { .. })
    ));
}
