//! Configuration models and loading for the docket workbench.
//!
//! This crate owns the docket config schema, validation, and the json5 file
//! loader used by front-end shells to construct a workbench.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// File loading and validation entry points.
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config, validate};
/// Configuration schema models.
pub use model::*;
