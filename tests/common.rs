//! Test utilities for certlint integration tests

#![allow(dead_code)]

use certlint::certificate::Certificate;
use certlint::rules::{Lint, LintDescriptor, LintResult};
use certlint::types::{LintSource, LintStatus};

/// A lint that always applies and always returns the same status
pub struct FixedLint(pub LintStatus);

impl Lint for FixedLint {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        true
    }

    fn execute(&self, _cert: &Certificate) -> LintResult {
        LintResult::new(self.0)
    }
}

/// Descriptor for a [`FixedLint`]
pub fn fixed(name: &str, source: LintSource, status: LintStatus) -> LintDescriptor {
    LintDescriptor::new(name, source, FixedLint(status))
}

/// A subscriber certificate that passes every built-in lint
pub const CLEAN_SUBSCRIBER: &str = r#"{
    "serial_number": "0a1b2c",
    "subject": [
        {"oid": "2.5.4.3", "value": "www.example.com"},
        {"oid": "2.5.4.6", "value": "US"}
    ],
    "issuer": [{"oid": "2.5.4.3", "value": "Example Issuing CA"}],
    "not_before": "2024-03-01T00:00:00Z",
    "not_after": "2025-03-01T00:00:00Z",
    "dns_names": ["www.example.com"],
    "issuing_certificate_urls": ["http://ca.example.com/issuing.crt"],
    "key_usage": ["digital_signature"]
}"#;

/// An EV subscriber certificate without a subject countryName and with a
/// reversed validity window
pub const BROKEN_EV_SUBSCRIBER: &str = r#"{
    "serial_number": "0d0e0f",
    "subject": [{"oid": "2.5.4.3", "value": "shop.example.com"}],
    "issuer": [{"oid": "2.5.4.3", "value": "Example EV CA"}],
    "not_before": "2024-03-01T00:00:00Z",
    "not_after": "2023-03-01T00:00:00Z",
    "policy_identifiers": ["2.23.140.1.1"]
}"#;

pub fn cert(json: &str) -> Certificate {
    Certificate::from_json(json).unwrap()
}
