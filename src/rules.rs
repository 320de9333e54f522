#![forbid(unsafe_code)]

//! Lint definitions, the lint registry, and registry filtering

pub mod filter;
pub mod registry;
mod rule;

// Re-export core types
pub use filter::FilterOptions;
pub use registry::{Registry, default_registry, register_lint};
pub use rule::{Lint, LintDescriptor, LintResult};
