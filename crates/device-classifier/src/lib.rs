//! Device category detection for Device Adapter
//!
//! This crate buckets the running device into one of four size categories
//! from its display height and picks layout values for that category.
//!
//! # Categories
//!
//! - [`Category::Compact`] - iPhone SE and the 4.7" generation
//! - [`Category::Regular`] - 6.1" class devices
//! - [`Category::Plus`] - 6.5"-6.7" class devices
//! - [`Category::Max`] - 6.9" class devices
//!
//! # Modules
//!
//! - [`category`] - The category enum, fallback order and multipliers
//! - [`specs`] - Reference height table and the pure classification rule
//! - [`values`] - Per-category value mapping
//! - [`config`] - Classifier configuration
//! - [`info`] - Detected device snapshot
//! - [`classifier`] - The memoizing classifier
//!
//! # Example
//!
//! ```rust
//! use app_platform::StaticDisplay;
//! use device_classifier::{CategoryValues, DeviceClassifier};
//!
//! let classifier = DeviceClassifier::new(StaticDisplay::with_height(667));
//! let font_sizes = CategoryValues::all(14, 16, 18, 20);
//! let font_size = classifier.select(&font_sizes);
//! assert_eq!(font_size, Some(&14));
//! assert_eq!(classifier.select_simple(3, 4), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classifier;
pub mod config;
pub mod info;
pub mod specs;
pub mod values;

// Re-export commonly used types
pub use category::{Category, ParseCategoryError};
pub use classifier::DeviceClassifier;
pub use config::{ClassifierConfig, ConfigError};
pub use info::DeviceInfo;
pub use specs::{categorize, CategorySpec, CATEGORY_SPECS, DEFAULT_TOLERANCE};
pub use values::CategoryValues;
