//! Device information snapshot

use crate::category::Category;
use app_platform::DisplayMetrics;
use serde::{Deserialize, Serialize};

/// Snapshot of the detected device
///
/// Built once when the device is first classified and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Detected category
    pub category: Category,
    /// Raw display height in logical points
    pub height: u32,
    /// Raw display width in logical points
    pub width: u32,
    /// Raw display density in dpi
    pub dpi: u32,
    /// Category is compact
    pub is_compact: bool,
    /// Category is regular
    pub is_regular: bool,
    /// Category is plus
    pub is_plus: bool,
    /// Category is max
    pub is_max: bool,
    /// Models associated with the detected category
    pub possible_models: Vec<String>,
}

impl DeviceInfo {
    /// Build a snapshot for `category` from the raw metrics
    pub fn new(category: Category, metrics: DisplayMetrics) -> Self {
        Self {
            category,
            height: metrics.height,
            width: metrics.width,
            dpi: metrics.dpi,
            is_compact: category == Category::Compact,
            is_regular: category == Category::Regular,
            is_plus: category == Category::Plus,
            is_max: category == Category::Max,
            possible_models: category
                .spec()
                .models
                .iter()
                .map(|model| model.to_string())
                .collect(),
        }
    }

    /// Raw metrics the snapshot was built from
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.height, self.width, self.dpi)
    }
}
