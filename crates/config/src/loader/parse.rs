//! Value parsing shared by the environment and settings-file layers.
//!
//! Every parser takes the name of the source (`DOTPATH_DELIMITER`,
//! `path.delimiter`, ...) so errors point at the setting the user wrote.

use crate::loader::error::ConfigError;
use crate::types::OutputFormat;

/// Parse a delimiter: exactly one character, not whitespace.
pub(crate) fn parse_delimiter(var: &str, raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) => validate_delimiter(var, delimiter),
        _ => Err(ConfigError::invalid(
            var,
            format!("must be exactly one character, got '{raw}'"),
        )),
    }
}

pub(crate) fn validate_delimiter(var: &str, delimiter: char) -> Result<char, ConfigError> {
    if delimiter.is_whitespace() {
        return Err(ConfigError::invalid(var, "must not be whitespace"));
    }
    Ok(delimiter)
}

pub(crate) fn parse_output_format(var: &str, raw: &str) -> Result<OutputFormat, ConfigError> {
    raw.parse().map_err(|message: String| ConfigError::invalid(var, message))
}

/// Parse a boolean flag. Accepts `true`/`false` and `1`/`0`, case-insensitively.
pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(var, "must be true or false")),
    }
}
