//! Selecting parts of the document: only, except, pluck, first, last,
//! random, divide, is-assoc.

use anyhow::Result;
use dotpath::PathAccessor;
use serde_json::{Value, json};

use super::Outcome;
use crate::document::parse_value;
use crate::error::CliError;

pub fn only(document: &Value, keys: &[String]) -> Outcome {
    Outcome::Value(dotpath::only(document, keys))
}

pub fn except(document: &Value, keys: &[String]) -> Outcome {
    Outcome::Value(dotpath::except(document, keys))
}

pub fn pluck(
    paths: &PathAccessor,
    document: &Value,
    value_path: &str,
    key: Option<&str>,
) -> Outcome {
    Outcome::Value(paths.pluck(document, value_path, key))
}

/// First element, or `default` when there is none.
pub fn first(document: &Value, default: Option<&str>) -> Result<Outcome> {
    pick(dotpath::first(document, |_, _| true), default, "first")
}

/// Last element, or `default` when there is none.
pub fn last(document: &Value, default: Option<&str>) -> Result<Outcome> {
    pick(dotpath::last(document, |_, _| true), default, "last")
}

fn pick(found: Option<&Value>, default: Option<&str>, which: &str) -> Result<Outcome> {
    match (found, default) {
        (Some(value), _) => Ok(Outcome::Value(value.clone())),
        (None, Some(raw)) => Ok(Outcome::Value(parse_value(raw))),
        (None, None) => {
            Err(CliError::PathNotFound(format!("{which} element of an empty document")).into())
        }
    }
}

/// One random element, or `count` of them as a list.
pub fn random(document: &Value, count: Option<usize>) -> Result<Outcome> {
    let picked = match count {
        None => dotpath::random_one(document)?.clone(),
        Some(count) => Value::Array(
            dotpath::random(document, count)?
                .into_iter()
                .cloned()
                .collect(),
        ),
    };
    Ok(Outcome::Value(picked))
}

/// Keys and values as `{"keys": [...], "values": [...]}`.
pub fn divide(document: &Value) -> Outcome {
    let (keys, values) = dotpath::divide(document);
    Outcome::Value(json!({"keys": keys, "values": values}))
}

pub fn is_assoc(document: &Value) -> Outcome {
    Outcome::Flag(dotpath::is_assoc(document))
}
