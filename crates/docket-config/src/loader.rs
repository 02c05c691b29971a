//! Config file loading and validation.

use crate::{ConfigError, DocketConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default config filename next to the workbench.
pub const DEFAULT_CONFIG_FILE: &str = "docket.json5";

/// Load and validate a config file from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<DocketConfig, ConfigError> {
    let path = path.as_ref();
    debug!("loading config (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    info!("loaded config (path={})", path.display());
    Ok(config)
}

/// Parse and validate a config document from a json5 string.
pub fn parse_config(contents: &str) -> Result<DocketConfig, ConfigError> {
    let value: Value = json5::from_str(contents)?;
    let config: DocketConfig = serde_json::from_value(value)?;
    validate(&config)?;
    Ok(config)
}

/// Validate field constraints on a config.
pub fn validate(config: &DocketConfig) -> Result<(), ConfigError> {
    if config.chat.tick_ms == 0 {
        return Err(ConfigError::InvalidField {
            path: "chat.tick_ms".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if let Some(greeting) = &config.chat.greeting
        && greeting.trim().is_empty()
    {
        return Err(ConfigError::InvalidField {
            path: "chat.greeting".to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}
