#![forbid(unsafe_code)]

//! Core Lint trait, lint descriptors, and lint results

use crate::certificate::Certificate;
use crate::error::BoxError;
use crate::types::{LintSource, LintStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Outcome of running one lint against one certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    #[serde(rename = "result")]
    pub status: LintStatus,

    /// Human-readable detail about the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LintResult {
    pub fn new(status: LintStatus) -> Self {
        Self {
            status,
            details: None,
        }
    }

    pub fn with_details(status: LintStatus, details: impl Into<String>) -> Self {
        Self {
            status,
            details: Some(details.into()),
        }
    }

    pub fn pass() -> Self {
        Self::new(LintStatus::Pass)
    }

    pub fn not_applicable() -> Self {
        Self::new(LintStatus::NA)
    }

    pub fn not_effective() -> Self {
        Self::new(LintStatus::NE)
    }
}

/// Trait that all lints must implement
///
/// The trait is `Send + Sync` so descriptors can be shared between registries
/// and threads.
pub trait Lint: Send + Sync {
    /// One-time setup, run when the lint is first registered
    fn initialize(&self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Returns true if the lint is meaningful for this certificate
    fn check_applies(&self, cert: &Certificate) -> bool;

    /// Runs the check. Only called when `check_applies` returned true.
    fn execute(&self, cert: &Certificate) -> LintResult;
}

/// Metadata and implementation of one registered lint
#[derive(Clone, Serialize)]
pub struct LintDescriptor {
    /// Unique name, used as the result key and on the command line
    pub name: String,

    pub description: String,

    /// Section of the source document the lint enforces
    pub citation: String,

    pub source: LintSource,

    /// Certificates issued before this date are not checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,

    /// Certificates issued on or after this date are not checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ineffective_date: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub lint: Arc<dyn Lint>,
}

impl LintDescriptor {
    pub fn new(name: impl Into<String>, source: LintSource, lint: impl Lint + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            citation: String::new(),
            source,
            effective_date: None,
            ineffective_date: None,
            lint: Arc::new(lint),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = citation.into();
        self
    }

    pub fn with_effective_date(mut self, date: DateTime<Utc>) -> Self {
        self.effective_date = Some(date);
        self
    }

    pub fn with_ineffective_date(mut self, date: DateTime<Utc>) -> Self {
        self.ineffective_date = Some(date);
        self
    }

    /// Returns true if the certificate's issuance falls inside the
    /// effective date range
    pub fn is_effective_for(&self, cert: &Certificate) -> bool {
        if let Some(effective) = self.effective_date {
            if cert.not_before < effective {
                return false;
            }
        }
        if let Some(ineffective) = self.ineffective_date {
            if cert.not_before >= ineffective {
                return false;
            }
        }
        true
    }

    /// Runs the lint against a certificate
    ///
    /// Non-applicable lints always yield `NA` and lints outside their
    /// effective range yield `NE`; the lint body only runs otherwise.
    pub fn execute(&self, cert: &Certificate) -> LintResult {
        if !self.lint.check_applies(cert) {
            return LintResult::not_applicable();
        }
        if !self.is_effective_for(cert) {
            return LintResult::not_effective();
        }
        self.lint.execute(cert)
    }
}

impl fmt::Debug for LintDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintDescriptor")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("citation", &self.citation)
            .field("effective_date", &self.effective_date)
            .field("ineffective_date", &self.ineffective_date)
            .finish_non_exhaustive()
    }
}
