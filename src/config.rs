//! Aggregator configuration with documented defaults.
//!
//! [`AggregatorConfig`] holds the two knobs applied identically to every
//! provider call: the per-provider result cap and the per-provider deadline.
//! It can be built in code or loaded from a TOML file; missing fields fall
//! back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Default cap on results requested from each provider.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Default per-provider deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Configuration for an [`Aggregator`](crate::Aggregator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Maximum number of results requested from each provider.
    pub max_results: usize,
    /// Per-provider call deadline in milliseconds. A provider that has not
    /// settled by then contributes no results.
    pub timeout_ms: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AggregatorConfig {
    /// The per-provider deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `timeout_ms` must be greater than 0
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(SearchError::Config(
                "timeout_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the text is not valid TOML for
    /// this type or the resulting configuration fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the file cannot be read or parsed,
    /// or if the configuration is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_documented_values() {
        let config = AggregatorConfig::default();
        assert_eq!(config.max_results, 100);
        assert_eq!(config.timeout_ms, 1000);
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(AggregatorConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = AggregatorConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = AggregatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = AggregatorConfig::from_toml_str("timeout_ms = 250\n").expect("parse");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = AggregatorConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AggregatorConfig::default());
    }

    #[test]
    fn invalid_toml_value_rejected() {
        let err = AggregatorConfig::from_toml_str("max_results = \"many\"\n").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn toml_with_zero_cap_fails_validation() {
        let err = AggregatorConfig::from_toml_str("max_results = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aggregator.toml");
        std::fs::write(&path, "max_results = 25\ntimeout_ms = 400\n").expect("write");

        let config = AggregatorConfig::from_file(&path).expect("load");
        assert_eq!(config.max_results, 25);
        assert_eq!(config.timeout(), Duration::from_millis(400));
    }

    #[test]
    fn from_file_missing_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = AggregatorConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
        assert!(err.to_string().contains("failed to read"));
    }
}
