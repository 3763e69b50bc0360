//! Search configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a minimax search.
///
/// ```toml
/// pruning = true
/// alpha = -2
/// beta = 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cut off branches that cannot change the result.
    #[serde(default = "default_pruning")]
    pruning: bool,

    /// Initial lower bound of the search window.
    #[serde(default = "default_alpha")]
    alpha: i32,

    /// Initial upper bound of the search window.
    #[serde(default = "default_beta")]
    beta: i32,
}

fn default_pruning() -> bool {
    true
}

// Wider than the utility range {-1, 0, 1} so no real value sits on a bound.
fn default_alpha() -> i32 {
    -2
}

fn default_beta() -> i32 {
    2
}

impl SearchConfig {
    /// Creates a configuration, rejecting windows that do not enclose [-1, 1].
    #[instrument]
    pub fn new(pruning: bool, alpha: i32, beta: i32) -> Result<Self, ConfigError> {
        let config = Self {
            pruning,
            alpha,
            beta,
        };
        config.check()?;
        Ok(config)
    }

    /// Plain minimax: identical window, no cutoffs.
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading search config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.check()?;

        info!(
            pruning = config.pruning,
            alpha = config.alpha,
            beta = config.beta,
            "Search config loaded"
        );
        Ok(config)
    }

    #[track_caller]
    fn check(&self) -> Result<(), ConfigError> {
        if self.alpha > -1 || self.beta < 1 {
            return Err(ConfigError::new(format!(
                "Search window ({}, {}) must enclose the utility range [-1, 1]",
                self.alpha, self.beta
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: default_pruning(),
            alpha: default_alpha(),
            beta: default_beta(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(*config.pruning());
        assert_eq!(*config.alpha(), -2);
        assert_eq!(*config.beta(), 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SearchConfig::from_toml("pruning = false").unwrap();
        assert!(!*config.pruning());
        assert_eq!(*config.alpha(), -2);
        assert_eq!(config, SearchConfig::exhaustive());
    }

    #[test]
    fn test_tight_window_is_accepted() {
        let config = SearchConfig::new(true, -1, 1).unwrap();
        assert_eq!(*config.beta(), 1);
    }

    #[test]
    fn test_narrow_window_is_rejected() {
        let err = SearchConfig::from_toml("alpha = 0").unwrap_err();
        assert!(err.message.contains("must enclose"));
        assert!(SearchConfig::new(true, -2, 0).is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = SearchConfig::from_toml("pruning = maybe").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
