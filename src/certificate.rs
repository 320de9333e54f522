#![forbid(unsafe_code)]

//! Structured certificate document
//!
//! This is the already-parsed representation lints inspect. Decoding PEM or
//! DER is left to the producer of the document; certlint reads the structure
//! from JSON.

use crate::error::DocumentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// id-at-commonName
pub const COMMON_NAME_OID: &str = "2.5.4.3";
/// id-at-countryName
pub const COUNTRY_NAME_OID: &str = "2.5.4.6";
/// id-at-organizationName
pub const ORGANIZATION_NAME_OID: &str = "2.5.4.10";

/// Policy OIDs that mark a certificate as Extended Validation
pub const EV_POLICY_OIDS: &[&str] = &[
    "2.23.140.1.1",
    "1.3.6.1.4.1.34697.2.1",
    "1.3.6.1.4.1.6449.1.2.1.5.1",
    "1.3.6.1.4.1.6334.1.100.1",
    "2.16.840.1.114412.2.1",
    "2.16.840.1.114028.10.1.2",
    "1.3.6.1.4.1.14370.1.6",
    "2.16.840.1.113733.1.7.23.6",
];

/// One attribute of a distinguished name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAttribute {
    pub oid: String,
    pub value: String,
}

impl NameAttribute {
    pub fn new(oid: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
        }
    }
}

/// An ordered list of name attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistinguishedName(pub Vec<NameAttribute>);

impl DistinguishedName {
    /// Returns true if any attribute has the given type OID
    pub fn has_attribute(&self, oid: &str) -> bool {
        self.0.iter().any(|attr| attr.oid == oid)
    }

    /// Returns the values of every attribute with the given type OID
    pub fn values(&self, oid: &str) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |attr| attr.oid == oid)
            .map(|attr| attr.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The basicConstraints extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicConstraints {
    pub is_ca: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_path_len: Option<u32>,
}

/// Bits of the keyUsage extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyUsage {
    DigitalSignature,
    ContentCommitment,
    KeyEncipherment,
    DataEncipherment,
    KeyAgreement,
    KeyCertSign,
    CrlSign,
    EncipherOnly,
    DecipherOnly,
}

/// A parsed X.509 certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default = "default_version")]
    pub version: u8,

    #[serde(default)]
    pub serial_number: String,

    #[serde(default)]
    pub subject: DistinguishedName,

    #[serde(default)]
    pub issuer: DistinguishedName,

    pub not_before: DateTime<Utc>,

    pub not_after: DateTime<Utc>,

    #[serde(default)]
    pub policy_identifiers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_constraints: Option<BasicConstraints>,

    /// `None` when the extension is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<Vec<KeyUsage>>,

    #[serde(default)]
    pub dns_names: Vec<String>,

    /// Authority information access caIssuers URLs
    #[serde(default)]
    pub issuing_certificate_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_unique_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_unique_id: Option<String>,
}

fn default_version() -> u8 {
    3
}

impl Certificate {
    /// Parse a certificate document from a JSON string
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Read a certificate document from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Load a certificate document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when basicConstraints marks this as a CA certificate
    pub fn is_ca(&self) -> bool {
        self.basic_constraints.is_some_and(|bc| bc.is_ca)
    }

    /// True when the subject and issuer names are identical
    pub fn is_self_signed(&self) -> bool {
        !self.subject.is_empty() && self.subject == self.issuer
    }

    /// True for end-entity certificates
    pub fn is_subscriber_cert(&self) -> bool {
        !self.is_ca() && !self.is_self_signed()
    }

    /// True when any policy identifier is a known EV policy
    pub fn is_ev(&self) -> bool {
        self.policy_identifiers
            .iter()
            .any(|oid| EV_POLICY_OIDS.contains(&oid.as_str()))
    }

    /// True when the keyUsage extension is present and asserts `usage`
    pub fn has_key_usage(&self, usage: KeyUsage) -> bool {
        self.key_usage
            .as_ref()
            .is_some_and(|usages| usages.contains(&usage))
    }
}
