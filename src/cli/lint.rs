//! Lint command implementation
//!
//! This module implements the `certlint lint` command, which:
//! - Loads configuration from certlint.toml
//! - Builds the filtered registry from config and flags
//! - Reads JSON certificate documents (files or stdin)
//! - Lints the documents in parallel, one sequential run per document
//! - Writes one result set per document, in input order
//! - Returns an exit code reflecting the findings

use crate::certificate::Certificate;
use crate::cli::args::LintArgs;
use crate::cli::common::{EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS, build_registry, load_config};
use crate::engine::{ExecutionEngine, ResultSet};
use crate::error::{CertlintError, DocumentError};
use crate::output::write_result_set;
use crate::rules::Registry;
use rayon::prelude::*;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Run the lint command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no error or fatal results)
/// - 1: At least one certificate has error or fatal results
/// - 2: Error (configuration, filter, or input error)
pub fn run_lint(registry: &Arc<Registry>, config_path: Option<&Path>, args: &LintArgs) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_lint_inner(registry, config_path, args, &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the lint command, writing results to `out`
pub(crate) fn run_lint_inner<W: Write>(
    registry: &Arc<Registry>,
    config_path: Option<&Path>,
    args: &LintArgs,
    out: &mut W,
) -> Result<i32, CertlintError> {
    // 1. Load config and build the filtered registry
    let config = load_config(config_path)?;
    let registry = build_registry(registry, &config, &args.filter)?;
    if registry.is_empty() {
        tracing::warn!("no lints selected, every result set will be empty");
    }

    let min_status = args.min_status.or(config.output.min_status);
    let pretty = args.pretty || config.output.pretty;

    // 2. Read stdin up front, everything else is read by the workers
    let inputs = collect_inputs(&args.files)?;

    // 3. Lint every document
    let engine = ExecutionEngine::new(registry);
    let outcomes: Vec<Result<ResultSet, DocumentError>> = inputs
        .par_iter()
        .map(|input| input.load().map(|cert| engine.lint(&cert)))
        .collect();

    // 4. Write results in input order
    let mut exit_code = EXIT_SUCCESS;
    for outcome in outcomes {
        match outcome {
            Ok(result_set) => {
                if result_set.errors_present() || result_set.fatals_present() {
                    exit_code = exit_code.max(EXIT_FINDINGS);
                }
                match min_status {
                    Some(threshold) => {
                        write_result_set(&mut *out, &result_set.filtered_above(threshold), pretty)?
                    }
                    None => write_result_set(&mut *out, &result_set, pretty)?,
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                exit_code = EXIT_ERROR;
            }
        }
    }
    out.flush()?;

    Ok(exit_code)
}

/// One certificate document to lint
enum Input {
    File(PathBuf),
    Stdin(String),
}

impl Input {
    fn load(&self) -> Result<Certificate, DocumentError> {
        match self {
            Input::File(path) => Certificate::load(path),
            Input::Stdin(content) => {
                Certificate::from_json(content).map_err(|source| DocumentError::Json {
                    path: PathBuf::from("<stdin>"),
                    source,
                })
            }
        }
    }
}

const STDIN_ARG: &str = "-";

/// Turn the file arguments into inputs
///
/// No files, or a `-` in any position, means stdin. Stdin is read once and
/// shared by every `-`.
fn collect_inputs(files: &[PathBuf]) -> Result<Vec<Input>, DocumentError> {
    if files.is_empty() {
        return Ok(vec![Input::Stdin(read_stdin()?)]);
    }

    let mut stdin: Option<String> = None;
    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        if file.as_path() == Path::new(STDIN_ARG) {
            let content = match &stdin {
                Some(content) => content.clone(),
                None => {
                    let content = read_stdin()?;
                    stdin = Some(content.clone());
                    content
                }
            };
            inputs.push(Input::Stdin(content));
        } else {
            inputs.push(Input::File(file.clone()));
        }
    }
    Ok(inputs)
}

fn read_stdin() -> Result<String, DocumentError> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|source| DocumentError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(content)
}
