//! Whole-document transforms: dot, undot, flatten, collapse, cross-join,
//! sort, sort-by, shuffle, prepend, wrap.

use anyhow::Result;
use dotpath::{PathAccessor, accessible, entries, wrap};
use serde_json::{Map, Value};

use super::Outcome;
use crate::document::parse_value;
use crate::error::CliError;

pub fn dot(paths: &PathAccessor, document: &Value, prefix: &str) -> Outcome {
    Outcome::Value(Value::Object(paths.dot(document, prefix)))
}

/// Expand delimiter-joined keys. A list is read as if its indices were the keys.
pub fn undot(paths: &PathAccessor, document: &Value) -> Result<Outcome> {
    let expanded = match document {
        Value::Object(flat) => paths.undot(flat),
        Value::Array(_) => {
            let flat: Map<String, Value> = entries(document)
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect();
            paths.undot(&flat)
        }
        _ => {
            return Err(CliError::InvalidInput(
                "undot expects an object of delimiter-joined keys".to_string(),
            )
            .into());
        }
    };
    Ok(Outcome::Document(expanded))
}

/// Flatten to a list of leaves. A depth of 0 is the same as no limit.
pub fn flatten(document: &Value, depth: Option<usize>) -> Outcome {
    Outcome::Value(Value::Array(dotpath::flatten(document, depth)))
}

pub fn collapse(document: &Value) -> Outcome {
    Outcome::Value(dotpath::collapse(document))
}

/// Cross join the elements of a list of lists. Scalar elements count as one-element lists.
pub fn cross_join(document: &Value) -> Result<Outcome> {
    if !accessible(document) {
        return Err(CliError::InvalidInput("cross-join expects a list of lists".to_string()).into());
    }
    let sequences: Vec<Vec<Value>> = entries(document)
        .map(|(_, item)| {
            let item = wrap(item.clone());
            entries(&item).map(|(_, value)| value.clone()).collect()
        })
        .collect();
    let joined = dotpath::cross_join(&sequences)
        .into_iter()
        .map(Value::Array)
        .collect();
    Ok(Outcome::Value(Value::Array(joined)))
}

pub fn sort(document: Value) -> Outcome {
    Outcome::Document(dotpath::sort_recursive(document))
}

pub fn sort_by(paths: &PathAccessor, document: &Value, path: &str) -> Outcome {
    Outcome::Document(paths.sort_by(document, path))
}

pub fn shuffle(document: Value) -> Outcome {
    Outcome::Value(dotpath::shuffle(document))
}

pub fn prepend(document: Value, raw: &str, key: Option<&str>) -> Outcome {
    Outcome::Document(dotpath::prepend(document, parse_value(raw), key))
}

pub fn wrap_document(document: Value) -> Outcome {
    Outcome::Value(wrap(document))
}
