//! Shape and ordering helpers: associativity checks, recursive sorting,
//! wrapping and prepending.

use serde_json::{Map, Value};

use crate::node::{compare_keys, compare_values, is_positional, parse_index, renumber};

/// Determine if `target` is associative.
///
/// A mapping is associative unless its keys are exactly `"0"` to `"n-1"` in
/// order. Sequences and scalars are never associative.
pub fn is_assoc(target: &Value) -> bool {
    match target {
        Value::Object(map) => !is_positional(map),
        _ => false,
    }
}

/// Recursively sort a value: associative mappings by key, everything
/// list-shaped by value. Children are sorted before their parents.
pub fn sort_recursive(target: Value) -> Value {
    match target {
        Value::Array(items) => {
            let mut items: Vec<Value> = items.into_iter().map(sort_recursive).collect();
            items.sort_by(compare_values);
            Value::Array(items)
        }
        Value::Object(map) => {
            let positional = is_positional(&map);
            let mut entries: Vec<(String, Value)> = map
                .into_iter()
                .map(|(key, value)| (key, sort_recursive(value)))
                .collect();
            if positional {
                let mut values: Vec<Value> = entries.into_iter().map(|(_, value)| value).collect();
                values.sort_by(compare_values);
                Value::Object(renumber(values))
            } else {
                entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
                Value::Object(entries.into_iter().collect())
            }
        }
        scalar => scalar,
    }
}

/// If the given value is not a container, wrap it in a one-element sequence.
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => value,
        other => Value::Array(vec![other]),
    }
}

/// Push an item onto the beginning of a container.
///
/// Without a key the value becomes the first positional element: sequences
/// shift, mappings have their integer keys renumbered behind it. With a key the
/// result is a mapping whose first entry is `key`; an existing entry under the
/// same key is dropped. Scalars are wrapped first.
pub fn prepend(target: Value, value: Value, key: Option<&str>) -> Value {
    match (target, key) {
        (Value::Object(map), None) => {
            let mut results = Map::with_capacity(map.len() + 1);
            results.insert("0".to_string(), value);
            let mut next_index = 1usize;
            for (name, item) in map {
                if parse_index(&name).is_some() {
                    results.insert(next_index.to_string(), item);
                    next_index += 1;
                } else {
                    results.insert(name, item);
                }
            }
            Value::Object(results)
        }
        (sequence, None) => {
            let mut items = match wrap(sequence) {
                Value::Array(items) => items,
                other => vec![other],
            };
            items.insert(0, value);
            Value::Array(items)
        }
        (container, Some(key)) => {
            let existing = match wrap(container) {
                Value::Object(map) => map,
                Value::Array(items) => renumber(items),
                _ => Map::new(),
            };
            let mut results = Map::with_capacity(existing.len() + 1);
            results.insert(key.to_string(), value);
            for (name, item) in existing {
                if name != key {
                    results.insert(name, item);
                }
            }
            Value::Object(results)
        }
    }
}
