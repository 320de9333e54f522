#![forbid(unsafe_code)]

//! certlint: compliance lints for X.509 certificates
//!
//! Lints are registered into a [`rules::Registry`] during start-up, the
//! registry can be narrowed with [`rules::FilterOptions`], and an
//! [`engine::ExecutionEngine`] runs the active lints against a parsed
//! [`certificate::Certificate`], producing a versioned [`engine::ResultSet`].

pub mod certificate;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lints;
pub mod logging;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{CertlintError, ConfigError, DocumentError, FilterError, RegistryError};

// Re-export core domain types for convenient access
pub use certificate::Certificate;
pub use engine::{ExecutionEngine, ResultSet};
pub use rules::{FilterOptions, Lint, LintDescriptor, LintResult, Registry, default_registry};
pub use types::{LintSource, LintStatus};

/// Run every lint in the default registry against `cert`
///
/// Lints must have been registered first, for example with
/// [`lints::register_builtin_lints`] on [`default_registry`].
pub fn lint_certificate(cert: &Certificate) -> ResultSet {
    ExecutionEngine::new(default_registry()).lint(cert)
}
