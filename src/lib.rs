//! Device Adapter
//!
//! Responsive layout helpers for phone-sized displays. The device is
//! classified once from its display height and layout values are picked or
//! scaled for the detected category.
//!
//! # Crates
//!
//! - [`app_platform`] - Display metrics providers
//! - [`device_classifier`] - Categories, reference table and the classifier
//!
//! # Example
//!
//! ```rust
//! use device_adapter::{CategoryValues, DeviceClassifier, StaticDisplay};
//!
//! let classifier = DeviceClassifier::new(StaticDisplay::with_height(852));
//! assert!(classifier.is_regular());
//!
//! let card_height = classifier.select_or(&CategoryValues::all(140, 160, 180, 200), 160);
//! assert_eq!(card_height, 160);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod logging;

pub use adapter::{adapter, adapter_or_install_with, install, AdapterError};

pub use app_platform::{
    DisplayCaps, DisplayMetrics, EnvDisplay, FixtureDisplay, PlatformError, StaticDisplay,
};

pub use device_classifier::{
    categorize, Category, CategorySpec, CategoryValues, ClassifierConfig, ConfigError,
    DeviceClassifier, DeviceInfo, ParseCategoryError, CATEGORY_SPECS, DEFAULT_TOLERANCE,
};
