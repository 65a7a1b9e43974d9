//! Platform capability queries for Device Adapter
//!
//! This crate is the boundary to the host platform. The classifier only
//! needs three numbers from it: display height, width and density.
//!
//! # Providers
//!
//! - [`display::StaticDisplay`] - Fixed metrics known up front
//! - [`display::EnvDisplay`] - Metrics read from environment variables
//! - [`display::FixtureDisplay`] - Metrics loaded from a JSON fixture

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod display;

pub use display::{
    DisplayCaps, DisplayMetrics, EnvDisplay, FixtureDisplay, PlatformError, StaticDisplay,
};
