//! Configuration file parsing and validation

pub mod certlint_toml;

pub use certlint_toml::{CONFIG_FILE_NAME, Config, FilterConfig, OutputConfig};
