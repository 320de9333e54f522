//! Error types for certlint
//!
//! This module defines the error types used throughout certlint, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Boxed error returned by a lint's one-time initializer
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Registration errors
///
/// All of these indicate a broken build rather than bad input data, so the
/// embedding application is expected to abort start-up when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Malformed descriptor (for example an empty name)
    #[error("Invalid lint descriptor: {0}")]
    InvalidDescriptor(String),

    /// A lint with the same name was already registered
    #[error("can not register lint with name {0:?} - it has already been registered")]
    DuplicateName(String),

    /// The lint's initializer returned an error
    #[error("failed to register lint with name {name:?} - failed to initialize: {source}")]
    InitializationFailed {
        name: String,
        #[source]
        source: BoxError,
    },
}

/// Errors building a filtered registry
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A name pattern was combined with an include/exclude name list
    #[error("a name filter cannot be used at the same time as include or exclude names")]
    ConflictingCriteria,

    /// An include/exclude name does not match any registered lint
    #[error("unknown lint name {0:?}")]
    UnknownRuleName(String),

    /// The name filter is not a valid regular expression
    #[error("invalid name filter: {0}")]
    InvalidPattern(String),

    /// A source label is not one of the known lint sources
    #[error("unknown lint source {0:?}")]
    UnknownSource(String),

    /// Registering a surviving lint into the filtered registry failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file parsed but holds an invalid value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Errors loading an input certificate document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse certificate {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for certlint
#[derive(Debug, thiserror::Error)]
pub enum CertlintError {
    /// Registration error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Filter error
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input document error
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
