//! Settings file loading for configuration.
//!
//! Responsibilities:
//! - Locate and read the JSON settings file.
//! - Extract settings from it by dotted path and apply them to a ConfigLoader.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - A missing file at the default location is skipped; a missing explicit file is an error.
//! - `null` entries in the file count as unset.

use std::path::Path;

use dotpath::PathAccessor;
use serde_json::Value;
use tracing::{debug, info};

use super::builder::{ConfigLoader, SettingsLayer};
use super::error::ConfigError;
use super::parse::parse_delimiter;
use crate::constants::{FILE_KEY_DELIMITER, FILE_KEY_OUTPUT_FORMAT, FILE_KEY_PRETTY};
use crate::paths::default_config_path;
use crate::types::OutputFormat;

/// Apply settings from the settings file to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader.config_path().cloned();
    let config_path = match &explicit {
        Some(path) => path.clone(),
        None => {
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
        }
    };

    if !config_path.exists() {
        if explicit.is_some() {
            return Err(ConfigError::ConfigFileNotFound { path: config_path });
        }
        debug!(path = %config_path.display(), "no settings file at default location");
        return Ok(());
    }

    let document = read_document(&config_path)?;
    let layer = settings_from_document(&document)?;
    info!(path = %config_path.display(), "loaded settings file");
    loader.set_file_layer(layer);
    Ok(())
}

fn read_document(path: &Path) -> Result<Value, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pull the known settings out of a parsed settings document.
///
/// Keys are addressed with `.`; a literal `"path.delimiter"` key works as well
/// as a nested `{"path": {"delimiter": ...}}`.
pub(crate) fn settings_from_document(document: &Value) -> Result<SettingsLayer, ConfigError> {
    let paths = PathAccessor::new();
    let lookup = |key: &str| paths.get(document, Some(key)).filter(|value| !value.is_null());

    let delimiter = match lookup(FILE_KEY_DELIMITER) {
        None => None,
        Some(Value::String(raw)) => Some(parse_delimiter(FILE_KEY_DELIMITER, raw)?),
        Some(other) => {
            return Err(ConfigError::invalid(
                FILE_KEY_DELIMITER,
                format!("must be a string, got {other}"),
            ));
        }
    };

    let output_format = lookup(FILE_KEY_OUTPUT_FORMAT)
        .map(|value| {
            serde_json::from_value::<OutputFormat>(value.clone()).map_err(|_| {
                ConfigError::invalid(
                    FILE_KEY_OUTPUT_FORMAT,
                    format!("expected \"json\" or \"yaml\", got {value}"),
                )
            })
        })
        .transpose()?;

    let pretty = lookup(FILE_KEY_PRETTY)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| ConfigError::invalid(FILE_KEY_PRETTY, "must be true or false"))
        })
        .transpose()?;

    Ok(SettingsLayer {
        delimiter,
        output_format,
        pretty,
    })
}
