//! CLI argument parsing using clap

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::rules::FilterOptions;
use crate::types::{LintSource, LintStatus};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// What `certlint list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One JSON object per lint
    Json,
    /// Schema record with one boolean field per lint
    Schema,
    /// Lint sources, one per line
    Sources,
}

/// certlint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "certlint")]
#[command(about = "Check parsed X.509 certificates against compliance lints")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to a certlint.toml (defaults to ./certlint.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available certlint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint certificate documents
    Lint(LintArgs),

    /// List the lints that would run
    List {
        /// What to print
        #[arg(short, long, default_value = "json")]
        format: ListFormat,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Arguments of `certlint lint`
#[derive(Args, Debug, Clone, Default)]
pub struct LintArgs {
    /// JSON certificate documents (reads stdin when empty or "-")
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Only output results above this status (e.g. "warn", "error")
    #[arg(long)]
    pub min_status: Option<LintStatus>,

    /// Pretty-print output
    #[arg(long)]
    pub pretty: bool,
}

/// Flags selecting which lints run
///
/// Each flag that is given replaces the matching `[filter]` config value.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only run lints with a name matching this regex (not with --include-names/--exclude-names)
    #[arg(long)]
    pub name_filter: Option<String>,

    /// Comma-separated list of lints to include by name
    #[arg(long)]
    pub include_names: Option<String>,

    /// Comma-separated list of lints to exclude by name
    #[arg(long)]
    pub exclude_names: Option<String>,

    /// Comma-separated list of lint sources to include
    #[arg(long)]
    pub include_sources: Option<String>,

    /// Comma-separated list of lint sources to exclude
    #[arg(long)]
    pub exclude_sources: Option<String>,
}

impl FilterArgs {
    /// Combine these flags with the config file's filter section
    ///
    /// Each flag that is given replaces the matching config value. Because a
    /// name filter cannot be combined with name lists, `--name-filter` also
    /// drops the config's name lists, and `--include-names`/`--exclude-names`
    /// drop the config's name filter.
    pub fn to_options(&self, config: &FilterConfig) -> Result<FilterOptions, FilterError> {
        let name_list_flag = self.include_names.is_some() || self.exclude_names.is_some();

        let name_filter = match &self.name_filter {
            Some(pattern) => Some(pattern.as_str()),
            None if name_list_flag => None,
            None => config.name_filter.as_deref(),
        };
        let config_names = |names: &[String]| {
            if self.name_filter.is_some() {
                String::new()
            } else {
                names.join(",")
            }
        };
        let include_names = self
            .include_names
            .clone()
            .unwrap_or_else(|| config_names(&config.include_names));
        let exclude_names = self
            .exclude_names
            .clone()
            .unwrap_or_else(|| config_names(&config.exclude_names));
        let include_sources = self
            .include_sources
            .clone()
            .unwrap_or_else(|| join_sources(&config.include_sources));
        let exclude_sources = self
            .exclude_sources
            .clone()
            .unwrap_or_else(|| join_sources(&config.exclude_sources));

        FilterOptions::from_raw(
            name_filter,
            &include_names,
            &exclude_names,
            &include_sources,
            &exclude_sources,
        )
    }
}

fn join_sources(sources: &[LintSource]) -> String {
    sources
        .iter()
        .map(LintSource::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
