//! Device classifier
//!
//! The classifier reads display metrics from the platform once, buckets the
//! device into a [`Category`] and answers every later query from that cached
//! result. The screen is assumed not to change while the process runs, so
//! the cache is never invalidated.

use crate::category::Category;
use crate::config::ClassifierConfig;
use crate::info::DeviceInfo;
use crate::specs::{categorize, within_tolerance, IPHONE_17_SERIES_HEIGHTS};
use crate::values::CategoryValues;
use app_platform::DisplayCaps;
use std::fmt;
use std::sync::OnceLock;

/// Memoizing device classifier
///
/// # Example
///
/// ```
/// use app_platform::StaticDisplay;
/// use device_classifier::{Category, CategoryValues, DeviceClassifier};
///
/// let classifier = DeviceClassifier::new(StaticDisplay::with_height(932));
/// assert_eq!(classifier.classify(), Category::Plus);
///
/// let header_height = CategoryValues::new().compact(50).regular(60).max(70);
/// assert_eq!(classifier.select(&header_height), Some(&70));
/// assert!((classifier.scale(100.0) - 110.0).abs() < 1e-9);
/// ```
pub struct DeviceClassifier {
    /// Platform metrics source, read once
    display: Box<dyn DisplayCaps>,
    /// Classifier configuration
    config: ClassifierConfig,
    /// Cached detection result
    detected: OnceLock<DeviceInfo>,
}

impl DeviceClassifier {
    /// Create a classifier with the default configuration
    pub fn new(display: impl DisplayCaps + 'static) -> Self {
        Self::with_config(display, ClassifierConfig::default())
    }

    /// Create a classifier with an explicit configuration
    pub fn with_config(display: impl DisplayCaps + 'static, config: ClassifierConfig) -> Self {
        Self {
            display: Box::new(display),
            config,
            detected: OnceLock::new(),
        }
    }

    /// Classifier configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether the device has been detected yet
    pub fn is_detected(&self) -> bool {
        self.detected.get().is_some()
    }

    /// Detected device category
    pub fn classify(&self) -> Category {
        self.info().category
    }

    /// Snapshot of the detected device, detecting it on first use
    pub fn info(&self) -> &DeviceInfo {
        self.detected.get_or_init(|| self.detect())
    }

    fn detect(&self) -> DeviceInfo {
        let metrics = self.display.metrics();
        let category = categorize(metrics.height, self.config.tolerance);
        let info = DeviceInfo::new(category, metrics);

        if self.config.log_detection {
            tracing::info!(%category, height = metrics.height, "Device detected");
            tracing::debug!(models = %info.possible_models.join(", "), "Possible models");
        }

        info
    }

    /// Value for the detected category
    ///
    /// Missing entries resolve through the category's fallback order. Returns
    /// `None` only for an empty mapping, in which case the caller supplies
    /// its own default.
    pub fn select<'a, T>(&self, values: &'a CategoryValues<T>) -> Option<&'a T> {
        values.resolve(self.classify())
    }

    /// Owned value for the detected category, or `default` for an empty mapping
    pub fn select_or<T: Clone>(&self, values: &CategoryValues<T>, default: T) -> T {
        self.select(values).cloned().unwrap_or(default)
    }

    /// `compact_value` on compact devices, `other_value` everywhere else
    pub fn select_simple<T>(&self, compact_value: T, other_value: T) -> T {
        if self.is_compact() {
            compact_value
        } else {
            other_value
        }
    }

    /// Scale a value sized for a regular device
    pub fn scale(&self, base: f64) -> f64 {
        self.scale_by(base, 1.0)
    }

    /// Scale a value by the category multiplier and an extra factor
    ///
    /// A factor of zero or NaN is treated as one. No rounding is applied.
    pub fn scale_by(&self, base: f64, factor: f64) -> f64 {
        let factor = if factor == 0.0 || factor.is_nan() {
            1.0
        } else {
            factor
        };
        base * self.classify().multiplier() * factor
    }

    /// Whether the raw height matches one of the iPhone 17 lineup heights
    ///
    /// This checks the raw height directly and can disagree with the
    /// category flags near category boundaries.
    pub fn is_iphone_17_series(&self) -> bool {
        within_tolerance(
            self.info().height,
            &IPHONE_17_SERIES_HEIGHTS,
            self.config.tolerance,
        )
    }

    /// Detected category is compact
    pub fn is_compact(&self) -> bool {
        self.classify() == Category::Compact
    }

    /// Detected category is regular
    pub fn is_regular(&self) -> bool {
        self.classify() == Category::Regular
    }

    /// Detected category is plus
    pub fn is_plus(&self) -> bool {
        self.classify() == Category::Plus
    }

    /// Detected category is max
    pub fn is_max(&self) -> bool {
        self.classify() == Category::Max
    }
}

impl fmt::Debug for DeviceClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceClassifier")
            .field("config", &self.config)
            .field("detected", &self.detected.get())
            .finish_non_exhaustive()
    }
}
