#![forbid(unsafe_code)]

//! Core domain types for certlint
//!
//! This module defines the lint status scale and the lint source categories
//! used throughout the system.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome level of a single lint
///
/// Variants are declared in increasing order so that the derived `Ord`
/// gives the severity scale used for filtering and aggregation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum LintStatus {
    /// Zero value, never produced by a well-formed lint
    #[default]
    Reserved,
    /// The lint does not apply to this certificate
    NA,
    /// The certificate predates (or postdates) the lint's effective range
    NE,
    /// The lint applies and found nothing wrong
    Pass,
    /// Informational finding
    Notice,
    Warn,
    Error,
    /// The lint could not complete
    Fatal,
}

impl LintStatus {
    /// All statuses in increasing order
    pub const ALL: [LintStatus; 8] = [
        LintStatus::Reserved,
        LintStatus::NA,
        LintStatus::NE,
        LintStatus::Pass,
        LintStatus::Notice,
        LintStatus::Warn,
        LintStatus::Error,
        LintStatus::Fatal,
    ];

    /// Returns the wire label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            LintStatus::Reserved => "reserved",
            LintStatus::NA => "NA",
            LintStatus::NE => "NE",
            LintStatus::Pass => "pass",
            LintStatus::Notice => "info",
            LintStatus::Warn => "warn",
            LintStatus::Error => "error",
            LintStatus::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LintStatus {
    type Err = String;

    /// Accepts the wire labels case-insensitively, plus `notice` for `Notice`
    fn from_str(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("notice") {
            return Ok(LintStatus::Notice);
        }
        LintStatus::ALL
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown lint status {:?}", s))
    }
}

impl TryFrom<String> for LintStatus {
    type Error = String;

    // `Self::Error` would be ambiguous with the `Error` variant
    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl From<LintStatus> for String {
    fn from(status: LintStatus) -> Self {
        status.as_str().to_string()
    }
}

/// The standard or body a lint derives from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LintSource {
    Unknown,
    Rfc5280,
    Rfc5480,
    Rfc5891,
    CabfBaselineRequirements,
    CabfEvGuidelines,
    AwsLabs,
    Mozilla,
    Apple,
    Community,
    EtsiEsi,
}

impl LintSource {
    /// All known sources
    pub const ALL: [LintSource; 11] = [
        LintSource::Unknown,
        LintSource::Rfc5280,
        LintSource::Rfc5480,
        LintSource::Rfc5891,
        LintSource::CabfBaselineRequirements,
        LintSource::CabfEvGuidelines,
        LintSource::AwsLabs,
        LintSource::Mozilla,
        LintSource::Apple,
        LintSource::Community,
        LintSource::EtsiEsi,
    ];

    /// Returns the label used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            LintSource::Unknown => "Unknown",
            LintSource::Rfc5280 => "RFC5280",
            LintSource::Rfc5480 => "RFC5480",
            LintSource::Rfc5891 => "RFC5891",
            LintSource::CabfBaselineRequirements => "CABF_BR",
            LintSource::CabfEvGuidelines => "CABF_EV",
            LintSource::AwsLabs => "AWSLabs",
            LintSource::Mozilla => "Mozilla",
            LintSource::Apple => "Apple",
            LintSource::Community => "Community",
            LintSource::EtsiEsi => "ETSI_ESI",
        }
    }
}

impl fmt::Display for LintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LintSource {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LintSource::ALL
            .iter()
            .find(|source| source.as_str() == s)
            .copied()
            .ok_or_else(|| FilterError::UnknownSource(s.to_string()))
    }
}

impl TryFrom<String> for LintSource {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LintSource> for String {
    fn from(source: LintSource) -> Self {
        source.as_str().to_string()
    }
}

/// Parse a comma separated list of source labels
///
/// Items are trimmed and empty items are skipped. Any unknown label fails the
/// whole list.
pub fn parse_source_list(raw: &str) -> Result<Vec<LintSource>, FilterError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse)
        .collect()
}
