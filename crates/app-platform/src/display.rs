//! Display metrics providers
//!
//! This module defines the display capability surface the classifier reads
//! from, and the concrete providers a host can plug in.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the display height in logical points
pub const ENV_DISPLAY_HEIGHT: &str = "DEVICE_DISPLAY_HEIGHT";

/// Environment variable holding the display width in logical points
pub const ENV_DISPLAY_WIDTH: &str = "DEVICE_DISPLAY_WIDTH";

/// Environment variable holding the display density in dpi
pub const ENV_DISPLAY_DPI: &str = "DEVICE_DISPLAY_DPI";

/// Platform error types
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A required variable was not set
    #[error("Missing display variable: {0}")]
    MissingVar(String),

    /// A variable was set but is not a valid unsigned integer
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar {
        /// Variable name
        name: String,
        /// Raw value that failed to parse
        value: String,
    },

    /// Fixture could not be parsed
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Fixture could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Raw display metrics as reported by the platform
///
/// Values are taken as-is. Heights and widths are logical points, density is
/// dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Display height in logical points
    pub height: u32,
    /// Display width in logical points
    #[serde(default)]
    pub width: u32,
    /// Display density in dpi
    #[serde(default)]
    pub dpi: u32,
}

impl DisplayMetrics {
    /// Create new display metrics
    pub fn new(height: u32, width: u32, dpi: u32) -> Self {
        Self { height, width, dpi }
    }

    /// Metrics with only a height, width and dpi left at zero
    pub fn with_height(height: u32) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

/// Source of display metrics
///
/// Implementations must be cheap to call, but callers are expected to read
/// the metrics once and cache what they derive from them.
pub trait DisplayCaps: Send + Sync {
    /// Current display metrics
    fn metrics(&self) -> DisplayMetrics;
}

impl<T: DisplayCaps + ?Sized> DisplayCaps for Box<T> {
    fn metrics(&self) -> DisplayMetrics {
        (**self).metrics()
    }
}

impl<T: DisplayCaps + ?Sized> DisplayCaps for std::sync::Arc<T> {
    fn metrics(&self) -> DisplayMetrics {
        (**self).metrics()
    }
}

// =============================================================================
// Static Provider
// =============================================================================

/// Provider returning fixed metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticDisplay {
    metrics: DisplayMetrics,
}

impl StaticDisplay {
    /// Create a provider from full metrics
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self { metrics }
    }

    /// Create a provider that only knows the display height
    pub fn with_height(height: u32) -> Self {
        Self::new(DisplayMetrics::with_height(height))
    }
}

impl DisplayCaps for StaticDisplay {
    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

// =============================================================================
// Environment Provider
// =============================================================================

/// Provider reading metrics from the process environment
///
/// Variables are read once at construction. The height is required, width
/// and dpi default to zero when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvDisplay {
    metrics: DisplayMetrics,
}

impl EnvDisplay {
    /// Read metrics from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read metrics through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let height = match lookup(ENV_DISPLAY_HEIGHT) {
            Some(raw) => parse_var(ENV_DISPLAY_HEIGHT, &raw)?,
            None => return Err(PlatformError::MissingVar(ENV_DISPLAY_HEIGHT.to_string())),
        };
        let width = lookup(ENV_DISPLAY_WIDTH)
            .map(|raw| parse_var(ENV_DISPLAY_WIDTH, &raw))
            .transpose()?
            .unwrap_or(0);
        let dpi = lookup(ENV_DISPLAY_DPI)
            .map(|raw| parse_var(ENV_DISPLAY_DPI, &raw))
            .transpose()?
            .unwrap_or(0);

        tracing::debug!(height, width, dpi, "Read display metrics from environment");

        Ok(Self {
            metrics: DisplayMetrics::new(height, width, dpi),
        })
    }
}

impl DisplayCaps for EnvDisplay {
    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

fn parse_var(name: &str, raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| PlatformError::InvalidVar {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

// =============================================================================
// Fixture Provider
// =============================================================================

/// Provider backed by a JSON fixture
///
/// ```
/// use app_platform::{DisplayCaps, FixtureDisplay};
///
/// let display = FixtureDisplay::from_json(r#"{"height": 852, "width": 393, "dpi": 460}"#).unwrap();
/// assert_eq!(display.metrics().height, 852);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureDisplay {
    metrics: DisplayMetrics,
}

impl FixtureDisplay {
    /// Parse a fixture from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let metrics: DisplayMetrics = serde_json::from_str(json)?;
        Ok(Self { metrics })
    }

    /// Load a fixture from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let fixture = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded display fixture");
        Ok(fixture)
    }
}

impl DisplayCaps for FixtureDisplay {
    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ==========================================================================
    // Metrics Tests
    // ==========================================================================

    #[test]
    fn test_metrics_with_height() {
        let metrics = DisplayMetrics::with_height(844);
        assert_eq!(metrics.height, 844);
        assert_eq!(metrics.width, 0);
        assert_eq!(metrics.dpi, 0);
    }

    #[test]
    fn test_static_display() {
        let display = StaticDisplay::new(DisplayMetrics::new(932, 430, 460));
        assert_eq!(display.metrics(), DisplayMetrics::new(932, 430, 460));
    }

    #[test]
    fn test_boxed_and_shared_providers() {
        let boxed: Box<dyn DisplayCaps> = Box::new(StaticDisplay::with_height(667));
        assert_eq!(boxed.metrics().height, 667);

        let shared: Arc<dyn DisplayCaps> = Arc::new(StaticDisplay::with_height(956));
        assert_eq!(shared.metrics().height, 956);
    }

    // ==========================================================================
    // Environment Tests
    // ==========================================================================

    #[test]
    fn test_env_display_all_vars() {
        let lookup = lookup_from(&[
            (ENV_DISPLAY_HEIGHT, "852"),
            (ENV_DISPLAY_WIDTH, "393"),
            (ENV_DISPLAY_DPI, " 460 "),
        ]);
        let display = EnvDisplay::from_lookup(lookup).unwrap();
        assert_eq!(display.metrics(), DisplayMetrics::new(852, 393, 460));
    }

    #[test]
    fn test_env_display_optional_vars_default() {
        let display = EnvDisplay::from_lookup(lookup_from(&[(ENV_DISPLAY_HEIGHT, "667")])).unwrap();
        assert_eq!(display.metrics(), DisplayMetrics::with_height(667));
    }

    #[test]
    fn test_env_display_missing_height() {
        let err = EnvDisplay::from_lookup(lookup_from(&[(ENV_DISPLAY_WIDTH, "393")])).unwrap_err();
        assert!(matches!(err, PlatformError::MissingVar(name) if name == ENV_DISPLAY_HEIGHT));
    }

    #[test]
    fn test_env_display_invalid_value() {
        let lookup = lookup_from(&[(ENV_DISPLAY_HEIGHT, "852"), (ENV_DISPLAY_DPI, "high")]);
        let err = EnvDisplay::from_lookup(lookup).unwrap_err();
        match err {
            PlatformError::InvalidVar { name, value } => {
                assert_eq!(name, ENV_DISPLAY_DPI);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // ==========================================================================
    // Fixture Tests
    // ==========================================================================

    #[test]
    fn test_fixture_from_json() {
        let display = FixtureDisplay::from_json(r#"{"height": 956}"#).unwrap();
        assert_eq!(display.metrics(), DisplayMetrics::with_height(956));
    }

    #[test]
    fn test_fixture_invalid_json() {
        let err = FixtureDisplay::from_json(r#"{"width": 393}"#).unwrap_err();
        assert!(matches!(err, PlatformError::Fixture(_)));
    }

    #[test]
    fn test_fixture_missing_file() {
        let err = FixtureDisplay::load("/nonexistent/display.json").unwrap_err();
        assert!(matches!(err, PlatformError::Io(_)));
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::MissingVar(ENV_DISPLAY_HEIGHT.to_string());
        assert_eq!(err.to_string(), "Missing display variable: DEVICE_DISPLAY_HEIGHT");
    }
}
