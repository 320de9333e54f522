//! List command implementation
//!
//! This module implements the `certlint list` command, which prints the
//! lints selected by the config file and filter flags:
//! - `json`: one descriptor object per line, in name order
//! - `schema`: a schema record with one boolean field per lint
//! - `sources`: the sources of the selected lints, sorted

use crate::cli::args::{FilterArgs, ListFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, build_registry, load_config};
use crate::error::CertlintError;
use crate::output::{write_schema, write_sources};
use crate::rules::Registry;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_list(
    registry: &Arc<Registry>,
    config_path: Option<&Path>,
    format: ListFormat,
    filter: &FilterArgs,
) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_list_inner(registry, config_path, format, filter, &mut out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

pub(crate) fn run_list_inner<W: Write>(
    registry: &Arc<Registry>,
    config_path: Option<&Path>,
    format: ListFormat,
    filter: &FilterArgs,
    out: &mut W,
) -> Result<(), CertlintError> {
    let config = load_config(config_path)?;
    let registry = build_registry(registry, &config, filter)?;

    match format {
        ListFormat::Json => registry.write_json(&mut *out)?,
        ListFormat::Schema => write_schema(&mut *out, &registry.names())?,
        ListFormat::Sources => write_sources(&mut *out, &registry.sources())?,
    }
    out.flush()?;
    Ok(())
}
