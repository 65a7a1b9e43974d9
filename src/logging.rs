//! Logging setup
//!
//! Library code only emits `tracing` events. Binaries and test harnesses
//! call [`init`] or [`try_init`] once to print them, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG`
///
/// Returns `false` if a global subscriber was already set.
pub fn try_init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a formatting subscriber, ignoring an existing one
pub fn init() {
    if !try_init() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
