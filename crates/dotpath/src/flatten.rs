//! Flattening and merging of nested containers.
//!
//! Responsibilities:
//! - Flatten nested containers into one sequence of leaf values.
//! - Collapse a container of containers into a single container.
//!
//! Does NOT handle:
//! - Dotted-key flattening, which needs a delimiter (see `PathAccessor::dot`).
//!
//! Invariants:
//! - Merging follows array-merge rules: elements under integer keys are appended
//!   and renumbered, string keys overwrite in place.
//! - The result stays a sequence for as long as no string key takes part.

use serde_json::Value;

use crate::node::{accessible, ensure_mapping, entries, parse_index};

/// Flatten nested sequences and mappings into a single sequence of values.
///
/// `depth` limits how many levels are opened: with `Some(1)` the direct
/// children of each nested container are merged without further descent.
/// `None` (and `Some(0)`) flattens all the way down. Keys are discarded.
pub fn flatten(target: &Value, depth: Option<usize>) -> Vec<Value> {
    let mut result = Vec::new();
    flatten_into(target, depth, &mut result);
    result
}

fn flatten_into(target: &Value, depth: Option<usize>, result: &mut Vec<Value>) {
    for (_, item) in entries(target) {
        if !accessible(item) {
            result.push(item.clone());
        } else if depth == Some(1) {
            result.extend(entries(item).map(|(_, value)| value.clone()));
        } else {
            flatten_into(item, depth.map(|d| d.saturating_sub(1)), result);
        }
    }
}

/// Collapse a container of containers into a single container.
///
/// Elements that are not containers are skipped.
pub fn collapse(target: &Value) -> Value {
    let mut results = Value::Array(Vec::new());
    for (_, values) in entries(target) {
        if accessible(values) {
            merge_into(&mut results, values);
        }
    }
    results
}

/// Merge the entries of `other` into `target` with array-merge rules.
pub fn merge_into(target: &mut Value, other: &Value) {
    let positional = entries(other).all(|(key, _)| key.index().is_some());
    if positional && let Value::Array(items) = target {
        items.extend(entries(other).map(|(_, value)| value.clone()));
        return;
    }

    let map = ensure_mapping(target);
    let mut next_index = map
        .keys()
        .filter_map(|key| parse_index(key))
        .map(|index| index + 1)
        .max()
        .unwrap_or(0);
    for (key, value) in entries(other) {
        if key.index().is_some() {
            map.insert(next_index.to_string(), value.clone());
            next_index += 1;
        } else {
            map.insert(key.to_string(), value.clone());
        }
    }
}
