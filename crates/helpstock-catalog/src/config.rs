//! catalog_check configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! The first command-line argument, when given, overrides `HELPSTOCK_CATALOG`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default tracing filter when `HELPSTOCK_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// catalog_check configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding an array of product drafts
    pub catalog_path: PathBuf,

    /// Stop at the first rejected product
    pub fail_fast: bool,

    /// tracing-subscriber filter directive, checked by `from_lookup`
    pub log_filter: String,
}

impl CatalogConfig {
    /// Load configuration from the process environment.
    pub fn load(cli_path: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(cli_path, |key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(cli_path: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = cli_path
            .or_else(|| lookup("HELPSTOCK_CATALOG"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingRequired("HELPSTOCK_CATALOG".to_string()))?;

        let fail_fast = lookup("HELPSTOCK_FAIL_FAST")
            .unwrap_or_else(|| "false".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HELPSTOCK_FAIL_FAST".to_string()))?;

        let log_filter =
            lookup("HELPSTOCK_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue("HELPSTOCK_LOG".to_string()))?;

        Ok(CatalogConfig {
            catalog_path,
            fail_fast,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            CatalogConfig::from_lookup(None, lookup(&[("HELPSTOCK_CATALOG", "products.json")]))
                .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("products.json"));
        assert!(!config.fail_fast);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_cli_path_overrides_env() {
        let config = CatalogConfig::from_lookup(
            Some("cli.json".to_string()),
            lookup(&[
                ("HELPSTOCK_CATALOG", "env.json"),
                ("HELPSTOCK_FAIL_FAST", "true"),
                ("HELPSTOCK_LOG", "debug"),
            ]),
        )
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("cli.json"));
        assert!(config.fail_fast);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_catalog() {
        let err = CatalogConfig::from_lookup(None, lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
        assert_eq!(
            err.to_string(),
            "Missing required configuration: HELPSTOCK_CATALOG"
        );
    }

    #[test]
    fn test_blank_catalog_is_missing() {
        let err = CatalogConfig::from_lookup(
            Some("   ".to_string()),
            lookup(&[("HELPSTOCK_CATALOG", "env.json")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));

        let err =
            CatalogConfig::from_lookup(None, lookup(&[("HELPSTOCK_CATALOG", " \t")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_invalid_log_filter() {
        let err = CatalogConfig::from_lookup(
            Some("a.json".to_string()),
            lookup(&[("HELPSTOCK_LOG", "info,helpstock=loud")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HELPSTOCK_LOG");
    }

    #[test]
    fn test_invalid_fail_fast() {
        let err = CatalogConfig::from_lookup(
            Some("a.json".to_string()),
            lookup(&[("HELPSTOCK_FAIL_FAST", "sometimes")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HELPSTOCK_FAIL_FAST");
    }
}
