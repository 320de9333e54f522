//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration and
//! building the filtered registry a command runs with.

use crate::cli::args::FilterArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CertlintError, ConfigError};
use crate::rules::Registry;
use std::path::Path;
use std::sync::Arc;

pub const EXIT_SUCCESS: i32 = 0;
/// At least one certificate has error or fatal results
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Load certlint.toml configuration
///
/// An explicit path must exist. Without one, `./certlint.toml` is used when
/// present and defaults apply otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                Config::load(default_path)
            } else {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Config::default())
            }
        }
    }
}

/// Build the registry a command runs with
///
/// Flags take precedence over the config file's `[filter]` section.
pub(crate) fn build_registry(
    registry: &Arc<Registry>,
    config: &Config,
    filter: &FilterArgs,
) -> Result<Arc<Registry>, CertlintError> {
    let opts = filter.to_options(&config.filter)?;
    Ok(registry.filter(&opts)?)
}
