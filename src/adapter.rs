//! Process-wide adapter
//!
//! Hosts that want a single classifier reachable from anywhere install one
//! here at startup. Installation happens at most once per process.

use device_classifier::DeviceClassifier;
use std::sync::OnceLock;
use thiserror::Error;

static ADAPTER: OnceLock<DeviceClassifier> = OnceLock::new();

/// Adapter error types
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A classifier was already installed for this process
    #[error("Device adapter already installed")]
    AlreadyInstalled,
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Install the process-wide classifier
///
/// Fails if one is already installed; the installed classifier is kept.
pub fn install(classifier: DeviceClassifier) -> Result<&'static DeviceClassifier> {
    let mut installed_now = false;
    let installed = ADAPTER.get_or_init(|| {
        installed_now = true;
        classifier
    });

    if installed_now {
        tracing::debug!("Device adapter installed");
        Ok(installed)
    } else {
        Err(AdapterError::AlreadyInstalled)
    }
}

/// Process-wide classifier, if installed
pub fn adapter() -> Option<&'static DeviceClassifier> {
    ADAPTER.get()
}

/// Process-wide classifier, installing the one built by `init` if needed
pub fn adapter_or_install_with<F>(init: F) -> &'static DeviceClassifier
where
    F: FnOnce() -> DeviceClassifier,
{
    ADAPTER.get_or_init(init)
}
