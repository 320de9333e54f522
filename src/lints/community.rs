#![forbid(unsafe_code)]

//! Community lints

use crate::certificate::Certificate;
use crate::error::RegistryError;
use crate::rules::{Lint, LintDescriptor, LintResult, Registry};
use crate::types::{LintSource, LintStatus};

/// notAfter must come after notBefore
pub struct ValidityTimeNotPositive;

impl Lint for ValidityTimeNotPositive {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        true
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.not_after < cert.not_before {
            LintResult::with_details(
                LintStatus::Error,
                format!(
                    "notAfter {} is before notBefore {}",
                    cert.not_after.to_rfc3339(),
                    cert.not_before.to_rfc3339()
                ),
            )
        } else {
            LintResult::pass()
        }
    }
}

pub fn register(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(
        LintDescriptor::new(
            "e_validity_time_not_positive",
            LintSource::Community,
            ValidityTimeNotPositive,
        )
        .with_description("Certificates MUST have a positive time for which they are valid")
        .with_citation("lint.AWSLabs"),
        true,
    )?;
    Ok(())
}
