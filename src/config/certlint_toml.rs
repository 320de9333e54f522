//! Parsing and validation for certlint.toml configuration files

use crate::error::{ConfigError, FilterError};
use crate::rules::filter::compile_name_filter;
use crate::types::{LintSource, LintStatus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "certlint.toml";

/// Main configuration struct for certlint.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub certlint: CertlintMeta,

    /// Which lints to run
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.certlint.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.certlint.version
            )));
        }

        if let Some(pattern) = &self.filter.name_filter {
            compile_name_filter(pattern).map_err(|e| ConfigError::Validation(e.to_string()))?;
            if !self.filter.include_names.is_empty() || !self.filter.exclude_names.is_empty() {
                return Err(ConfigError::Validation(
                    FilterError::ConflictingCriteria.to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// `[certlint]` metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertlintMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for CertlintMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}

/// `[filter]` section, mirroring the filter flags of the command line
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Regular expression lint names must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_filter: Option<String>,

    #[serde(default)]
    pub include_names: Vec<String>,

    #[serde(default)]
    pub exclude_names: Vec<String>,

    #[serde(default)]
    pub include_sources: Vec<LintSource>,

    #[serde(default)]
    pub exclude_sources: Vec<LintSource>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Only report results strictly above this status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_status: Option<LintStatus>,

    /// Indent JSON output
    #[serde(default)]
    pub pretty: bool,
}
