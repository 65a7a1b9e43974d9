//! Classifier configuration

use crate::specs::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Match tolerance in logical points (exclusive)
    #[serde(default = "default_tolerance")]
    pub tolerance: u32,

    /// Emit tracing events when the device is first detected
    #[serde(default = "default_true")]
    pub log_detection: bool,
}

fn default_tolerance() -> u32 {
    DEFAULT_TOLERANCE
}

fn default_true() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            log_detection: true,
        }
    }
}

impl ClassifierConfig {
    /// Parse configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the match tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable detection logging
    pub fn with_log_detection(mut self, enabled: bool) -> Self {
        self.log_detection = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.tolerance, 15);
        assert!(config.log_detection);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ClassifierConfig::from_json(r#"{"tolerance": 10}"#).unwrap();
        assert_eq!(config.tolerance, 10);
        assert!(config.log_detection);

        let config = ClassifierConfig::from_json(r#"{"logDetection": false}"#).unwrap();
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(!config.log_detection);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = ClassifierConfig::from_json("{}").unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ClassifierConfig::from_json(r#"{"tolerance": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClassifierConfig::load("/nonexistent/classifier.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = ClassifierConfig::default()
            .with_tolerance(0)
            .with_log_detection(false);
        assert_eq!(config.tolerance, 0);
        assert!(!config.log_detection);
    }
}
