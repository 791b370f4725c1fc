//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `DOTPATH_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from the settings file (see file.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use std::path::PathBuf;

use super::builder::{ConfigLoader, SettingsLayer};
use super::error::ConfigError;
use super::parse::{parse_bool, parse_delimiter, parse_output_format};
use crate::constants::{ENV_CONFIG_PATH, ENV_DELIMITER, ENV_OUTPUT_FORMAT, ENV_PRETTY};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let mut layer = SettingsLayer::default();

    if let Some(delimiter) = env_var_or_none(ENV_DELIMITER) {
        layer.delimiter = Some(parse_delimiter(ENV_DELIMITER, &delimiter)?);
    }
    if let Some(format) = env_var_or_none(ENV_OUTPUT_FORMAT) {
        layer.output_format = Some(parse_output_format(ENV_OUTPUT_FORMAT, &format)?);
    }
    if let Some(pretty) = env_var_or_none(ENV_PRETTY) {
        layer.pretty = Some(parse_bool(ENV_PRETTY, &pretty)?);
    }
    loader.set_env_layer(layer);

    // Config path from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }

    Ok(())
}
