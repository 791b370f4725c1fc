//! Selecting entries out of a container.
//!
//! Keys are matched literally here; nothing in this module splits paths.

use serde_json::{Map, Value};

use crate::node::{Key, entries};

/// Get the subset of `target` whose top-level keys are listed in `keys`.
///
/// Entries keep their order in `target`. A sequence yields a sequence of the
/// selected elements.
pub fn only<I>(target: &Value, keys: I) -> Value
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keys: Vec<I::Item> = keys.into_iter().collect();
    retain(target, |_, key| keys.iter().any(|raw| key.matches(raw.as_ref())))
}

/// Get all of `target` except the listed top-level keys.
pub fn except<I>(target: &Value, keys: I) -> Value
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keys: Vec<I::Item> = keys.into_iter().collect();
    retain(target, |_, key| !keys.iter().any(|raw| key.matches(raw.as_ref())))
}

/// Keep the entries for which `predicate(value, key)` holds.
///
/// Keys are preserved. Sequence survivors stay a sequence only when they
/// are the leading elements; otherwise they come back as a mapping keyed by
/// their original indices.
pub fn filter<P>(target: &Value, predicate: P) -> Value
where
    P: FnMut(&Value, Key<'_>) -> bool,
{
    retain(target, predicate)
}

fn retain<P>(target: &Value, mut keep: P) -> Value
where
    P: FnMut(&Value, Key<'_>) -> bool,
{
    match target {
        Value::Array(items) => {
            let survivors: Vec<(usize, &Value)> = items
                .iter()
                .enumerate()
                .filter(|(index, item)| keep(*item, Key::Index(*index)))
                .collect();
            let prefix = survivors
                .iter()
                .enumerate()
                .all(|(position, (index, _))| position == *index);
            if prefix {
                Value::Array(survivors.into_iter().map(|(_, item)| item.clone()).collect())
            } else {
                Value::Object(
                    survivors
                        .into_iter()
                        .map(|(index, item)| (index.to_string(), item.clone()))
                        .collect(),
                )
            }
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(name, item)| keep(*item, Key::Name(name.as_str())))
                .map(|(name, item)| (name.clone(), item.clone()))
                .collect(),
        ),
        _ => Value::Object(Map::new()),
    }
}

/// Return the first element passing `predicate(value, key)`.
///
/// Pass `|_, _| true` to take the first element unconditionally.
pub fn first<P>(target: &Value, mut predicate: P) -> Option<&Value>
where
    P: FnMut(&Value, Key<'_>) -> bool,
{
    entries(target)
        .find(|(key, value)| predicate(*value, *key))
        .map(|(_, value)| value)
}

/// Like [`first`], cloning the match or producing `default` when none matches.
pub fn first_or_else<P, F>(target: &Value, predicate: P, default: F) -> Value
where
    P: FnMut(&Value, Key<'_>) -> bool,
    F: FnOnce() -> Value,
{
    first(target, predicate).cloned().unwrap_or_else(default)
}

/// Return the last element passing `predicate(value, key)`.
///
/// The scan runs back to front and reports each element under its original key.
pub fn last<P>(target: &Value, mut predicate: P) -> Option<&Value>
where
    P: FnMut(&Value, Key<'_>) -> bool,
{
    entries(target)
        .rev()
        .find(|(key, value)| predicate(*value, *key))
        .map(|(_, value)| value)
}

/// Like [`last`], cloning the match or producing `default` when none matches.
pub fn last_or_else<P, F>(target: &Value, predicate: P, default: F) -> Value
where
    P: FnMut(&Value, Key<'_>) -> bool,
    F: FnOnce() -> Value,
{
    last(target, predicate).cloned().unwrap_or_else(default)
}

/// Divide a container into its keys and its values, index-aligned.
///
/// Sequence keys are numbers, mapping keys are strings.
pub fn divide(target: &Value) -> (Vec<Value>, Vec<Value>) {
    entries(target)
        .map(|(key, value)| (key.to_value(), value.clone()))
        .unzip()
}

/// Cross join the given sequences, returning every combination in input order.
///
/// With no inputs the result holds one empty combination; any empty input makes
/// the result empty.
pub fn cross_join<S>(sequences: &[S]) -> Vec<Vec<Value>>
where
    S: AsRef<[Value]>,
{
    let mut results: Vec<Vec<Value>> = vec![Vec::new()];
    for sequence in sequences {
        let sequence = sequence.as_ref();
        results = results
            .iter()
            .flat_map(|product| {
                sequence.iter().map(move |item| {
                    let mut next = Vec::with_capacity(product.len() + 1);
                    next.extend_from_slice(product);
                    next.push(item.clone());
                    next
                })
            })
            .collect();
    }
    results
}
