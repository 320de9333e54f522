//! Integration tests for certlint.toml loading

use certlint::cli::FilterArgs;
use certlint::config::{CONFIG_FILE_NAME, Config};
use certlint::rules::FilterOptions;
use certlint::error::{ConfigError, FilterError};
use certlint::lints::register_builtin_lints;
use certlint::rules::Registry;
use certlint::types::{LintSource, LintStatus};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

fn options(config: &Config) -> FilterOptions {
    FilterArgs::default().to_options(&config.filter).unwrap()
}

fn builtin_registry() -> Arc<Registry> {
    let registry = Arc::new(Registry::new());
    register_builtin_lints(&registry).unwrap();
    registry
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[certlint]
version = "1"

[filter]
include_sources = ["CABF_BR", "RFC5280"]
exclude_names = ["n_ca_digital_signature_not_set"]

[output]
min_status = "notice"
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.filter.include_sources,
        vec![LintSource::CabfBaselineRequirements, LintSource::Rfc5280]
    );
    assert_eq!(config.output.min_status, Some(LintStatus::Notice));
    assert!(!config.output.pretty);
}

#[test]
fn test_config_filter_narrows_registry() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[filter]\ninclude_sources = [\"CABF_BR\"]\nexclude_names = [\"n_ca_digital_signature_not_set\"]\n",
    );

    let config = Config::load(&path).unwrap();
    let filtered = builtin_registry()
        .filter(&options(&config))
        .unwrap();
    assert_eq!(
        filtered.names(),
        vec![
            "e_ev_country_name_missing",
            "w_sub_cert_aia_does_not_contain_issuing_ca_url"
        ]
    );
}

#[test]
fn test_config_name_filter() {
    let config = Config::parse("[filter]\nname_filter = \"^w_\"\n").unwrap();
    let filtered = builtin_registry()
        .filter(&options(&config))
        .unwrap();
    assert_eq!(
        filtered.names(),
        vec!["w_sub_cert_aia_does_not_contain_issuing_ca_url"]
    );
}

#[test]
fn test_config_unknown_lint_name_fails_filtering() {
    let config = Config::parse("[filter]\ninclude_names = [\"e_not_a_lint\"]\n").unwrap();
    let result = builtin_registry().filter(&options(&config));
    assert!(matches!(result, Err(FilterError::UnknownRuleName(_))));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join(CONFIG_FILE_NAME));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[filter\ninclude_names = ");
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_conflicting_filter_config() {
    let err = Config::parse("[filter]\nname_filter = \"^e_\"\ninclude_names = [\"e_x\"]\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("name filter"));
}
