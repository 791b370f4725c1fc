//! Input document handling.
//!
//! Responsibilities:
//! - Decide the input format from the flag or the file extension.
//! - Read and parse the input document from a file or stdin.
//! - Parse values given on the command line.
//!
//! Does NOT handle:
//! - Rendering output (see `formatters`).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use dotpath_config::OutputFormat;
use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

/// Resolve the format of the input document.
///
/// An explicit format wins; otherwise `.yaml`/`.yml` files are YAML and
/// everything else, stdin included, is JSON.
pub fn detect_format(explicit: Option<OutputFormat>, path: Option<&Path>) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }
    match path
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("yaml" | "yml") => OutputFormat::Yaml,
        _ => OutputFormat::Json,
    }
}

/// Read the input document from `path`, or stdin when no path is given.
pub fn read_document(path: Option<&Path>, format: OutputFormat) -> Result<Value> {
    let (raw, source) = match path {
        Some(path) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read input from stdin")?;
            (raw, "stdin".to_string())
        }
    };

    if raw.trim().is_empty() {
        return Err(CliError::InvalidInput(format!("input document from {source} is empty")).into());
    }

    debug!(%source, %format, bytes = raw.len(), "parsing input document");
    parse_document(&raw, format).with_context(|| format!("Failed to parse {format} from {source}"))
}

/// Parse a document in the given format.
pub fn parse_document(raw: &str, format: OutputFormat) -> Result<Value> {
    Ok(match format {
        OutputFormat::Json => serde_json::from_str(raw)?,
        OutputFormat::Yaml => serde_yaml::from_str(raw)?,
    })
}

/// Parse a value given on the command line.
///
/// Valid JSON is taken as JSON; anything else becomes a string, so
/// `dotpath set name Alice` does not need quoting.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
