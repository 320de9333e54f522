#![forbid(unsafe_code)]

//! RFC 5280 lints

use crate::certificate::Certificate;
use crate::error::RegistryError;
use crate::rules::{Lint, LintDescriptor, LintResult, Registry};
use crate::types::{LintSource, LintStatus};

/// CAs must not issue certificates with issuer or subject unique identifiers
pub struct CertContainsUniqueIdentifier;

impl Lint for CertContainsUniqueIdentifier {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        true
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match (&cert.issuer_unique_id, &cert.subject_unique_id) {
            (None, None) => LintResult::pass(),
            (Some(_), _) => LintResult::with_details(LintStatus::Error, "issuerUniqueID present"),
            (None, Some(_)) => {
                LintResult::with_details(LintStatus::Error, "subjectUniqueID present")
            }
        }
    }
}

/// A CA certificate must have a non-empty subject
pub struct CaSubjectFieldEmpty;

impl Lint for CaSubjectFieldEmpty {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ca()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.subject.is_empty() {
            LintResult::new(LintStatus::Error)
        } else {
            LintResult::pass()
        }
    }
}

pub fn register(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(
        LintDescriptor::new(
            "e_cert_contains_unique_identifier",
            LintSource::Rfc5280,
            CertContainsUniqueIdentifier,
        )
        .with_description("CAs MUST NOT generate certificate with unique identifiers")
        .with_citation("RFC 5280: 4.1.2.8"),
        true,
    )?;
    registry.register(
        LintDescriptor::new(
            "e_ca_subject_field_empty",
            LintSource::Rfc5280,
            CaSubjectFieldEmpty,
        )
        .with_description(
            "CA Certificates subject field MUST not be empty and MUST have a non-empty distinguished name",
        )
        .with_citation("RFC 5280: 4.1.2.6"),
        true,
    )?;
    Ok(())
}
