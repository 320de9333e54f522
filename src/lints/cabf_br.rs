#![forbid(unsafe_code)]

//! CA/Browser Forum Baseline Requirements lints

use crate::certificate::{COUNTRY_NAME_OID, Certificate, KeyUsage};
use crate::error::RegistryError;
use crate::lints::cabf_br_effective_date;
use crate::rules::{Lint, LintDescriptor, LintResult, Registry};
use crate::types::{LintSource, LintStatus};

/// EV subscriber certificates must carry a subject countryName
pub struct EvCountryNameMissing;

impl Lint for EvCountryNameMissing {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && cert.is_subscriber_cert()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.subject.has_attribute(COUNTRY_NAME_OID) {
            LintResult::pass()
        } else {
            LintResult::new(LintStatus::Error)
        }
    }
}

/// Subscriber certificates should point at their issuing CA certificate
pub struct SubCertAiaMissingIssuingCaUrl;

impl Lint for SubCertAiaMissingIssuingCaUrl {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber_cert()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert
            .issuing_certificate_urls
            .iter()
            .any(|url| !url.trim().is_empty())
        {
            LintResult::pass()
        } else {
            LintResult::with_details(
                LintStatus::Warn,
                "authorityInformationAccess has no caIssuers URL",
            )
        }
    }
}

/// Root and subordinate CA certificates used to sign OCSP responses need
/// digitalSignature
pub struct CaDigitalSignatureNotSet;

impl Lint for CaDigitalSignatureNotSet {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ca() && cert.key_usage.is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.has_key_usage(KeyUsage::DigitalSignature) {
            LintResult::pass()
        } else {
            LintResult::new(LintStatus::Notice)
        }
    }
}

pub fn register(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(
        LintDescriptor::new(
            "e_ev_country_name_missing",
            LintSource::CabfBaselineRequirements,
            EvCountryNameMissing,
        )
        .with_description("EV certificates must include countryName in subject")
        .with_citation("BRs: 7.1.6.1"),
        true,
    )?;
    registry.register(
        LintDescriptor::new(
            "w_sub_cert_aia_does_not_contain_issuing_ca_url",
            LintSource::CabfBaselineRequirements,
            SubCertAiaMissingIssuingCaUrl,
        )
        .with_description(
            "Subscriber certificates should include the HTTP URL of the issuing CA's certificate",
        )
        .with_citation("BRs: 7.1.2.3")
        .with_effective_date(cabf_br_effective_date()),
        true,
    )?;
    registry.register(
        LintDescriptor::new(
            "n_ca_digital_signature_not_set",
            LintSource::CabfBaselineRequirements,
            CaDigitalSignatureNotSet,
        )
        .with_description(
            "Root and Subordinate CA certificates that wish to use their private key for \
             signing OCSP responses will not be able to without their digital signature set",
        )
        .with_citation("BRs: 7.1.2.1")
        .with_effective_date(cabf_br_effective_date()),
        true,
    )?;
    Ok(())
}
