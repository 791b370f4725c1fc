//! Path-addressed reads and writes: get, has, set, add, forget, pull.

use anyhow::Result;
use dotpath::PathAccessor;
use serde_json::Value;
use tracing::debug;

use super::Outcome;
use crate::document::parse_value;
use crate::error::CliError;

/// Read the value at `path`, or the whole document when no path is given.
pub fn get(
    paths: &PathAccessor,
    document: &Value,
    path: Option<&str>,
    default: Option<&str>,
) -> Result<Outcome> {
    let Some(path) = path else {
        return Ok(Outcome::Value(document.clone()));
    };
    match (paths.get(document, Some(path)), default) {
        (Some(found), _) => Ok(Outcome::Value(found.clone())),
        (None, Some(raw)) => Ok(Outcome::Value(parse_value(raw))),
        (None, None) => Err(CliError::PathNotFound(path.to_string()).into()),
    }
}

/// The requested paths that do not exist in the document, in request order.
///
/// Empty when every path exists.
pub fn missing(paths: &PathAccessor, document: &Value, requested: &[String]) -> Vec<String> {
    if paths.has(document, requested) {
        return Vec::new();
    }
    requested
        .iter()
        .filter(|path| !paths.has(document, [path.as_str()]))
        .cloned()
        .collect()
}

pub fn set(paths: &PathAccessor, mut document: Value, path: &str, raw: &str) -> Outcome {
    paths.set(&mut document, Some(path), parse_value(raw));
    Outcome::Document(document)
}

pub fn add(paths: &PathAccessor, mut document: Value, path: &str, raw: &str) -> Outcome {
    if !paths.add(&mut document, path, parse_value(raw)) {
        debug!(path, "value already present; document unchanged");
    }
    Outcome::Document(document)
}

pub fn forget(paths: &PathAccessor, mut document: Value, requested: &[String]) -> Outcome {
    paths.forget(&mut document, requested);
    Outcome::Document(document)
}

/// Take the value at `path` out of the document.
///
/// Missing paths fall back to `default`; without one they are an error and
/// the document is left alone.
pub fn pull(
    paths: &PathAccessor,
    mut document: Value,
    path: &str,
    default: Option<&str>,
) -> Result<Outcome> {
    if paths.get(&document, Some(path)).is_none() && default.is_none() {
        return Err(CliError::PathNotFound(path.to_string()).into());
    }
    let value = paths.pull_or_else(&mut document, path, || {
        default.map(parse_value).unwrap_or(Value::Null)
    });
    Ok(Outcome::Extracted { value, document })
}
