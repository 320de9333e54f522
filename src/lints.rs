#![forbid(unsafe_code)]

//! Built-in lints
//!
//! Each group registers its lints explicitly; [`register_builtin_lints`] is
//! the start-up step that makes them available in a registry. Groups are
//! gated behind cargo features so embedders can ship a smaller lint set.

use crate::error::RegistryError;
use crate::rules::Registry;

#[cfg(feature = "lints-cabf")]
pub mod cabf_br;
#[cfg(feature = "lints-community")]
pub mod community;
#[cfg(feature = "lints-rfc")]
pub mod rfc;

/// Register every enabled built-in lint group, running each initializer
///
/// # Errors
///
/// Returns the first `RegistryError`; a failure means the lint set itself is
/// broken and start-up should abort.
pub fn register_builtin_lints(registry: &Registry) -> Result<(), RegistryError> {
    #[cfg(feature = "lints-cabf")]
    cabf_br::register(registry)?;
    #[cfg(feature = "lints-community")]
    community::register(registry)?;
    #[cfg(feature = "lints-rfc")]
    rfc::register(registry)?;

    tracing::debug!(lints = registry.len(), "registered built-in lints");
    Ok(())
}

/// Midnight UTC of a day given as Unix seconds
#[cfg(feature = "lints-cabf")]
fn utc_date(unix_seconds: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH + chrono::TimeDelta::seconds(unix_seconds)
}

/// 2012-07-01, when the CA/Browser Forum Baseline Requirements took effect
#[cfg(feature = "lints-cabf")]
pub(crate) fn cabf_br_effective_date() -> chrono::DateTime<chrono::Utc> {
    utc_date(1_341_100_800)
}
