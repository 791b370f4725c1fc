//! Node-level helpers shared by every operation.
//!
//! Responsibilities:
//! - Define [`Key`], the position of an entry inside a sequence or mapping.
//! - Iterate the entries of any node uniformly ([`entries`]).
//! - Resolve, insert and remove a single segment one level deep.
//! - Provide the total order used when sorting nodes.
//!
//! Does NOT handle:
//! - Multi-segment paths (see `accessor.rs`).
//!
//! Invariants:
//! - A sequence is addressed by canonical decimal indices only (`"0"`, `"12"`),
//!   never by `"+1"`, `"01"` or `"-1"`.
//! - Scalars are never accessible and never contain keys.

use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;

/// Position of an entry within an accessible node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Index into a sequence.
    Index(usize),
    /// Key of a mapping entry.
    Name(&'a str),
}

impl Key<'_> {
    /// The integer this key denotes, if any.
    ///
    /// Mapping keys that spell a canonical index (`"0"`, `"7"`) count as integers.
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(name) => parse_index(name),
        }
    }

    /// Returns true if `raw` names this key.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Key::Index(index) => parse_index(raw) == Some(*index),
            Key::Name(name) => *name == raw,
        }
    }

    /// Convert the key into a node: indices become numbers, names become strings.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(index) => Value::from(*index),
            Key::Name(name) => Value::String((*name).to_string()),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Iterator over the `(key, value)` entries of a node.
///
/// Created by [`entries`]. Scalars yield nothing.
pub enum Entries<'a> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Mapping(serde_json::map::Iter<'a>),
    Scalar,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Sequence(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
            Entries::Mapping(iter) => iter.next().map(|(key, value)| (Key::Name(key), value)),
            Entries::Scalar => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Sequence(iter) => iter.size_hint(),
            Entries::Mapping(iter) => iter.size_hint(),
            Entries::Scalar => (0, Some(0)),
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Sequence(iter) => iter
                .next_back()
                .map(|(index, value)| (Key::Index(index), value)),
            Entries::Mapping(iter) => iter.next_back().map(|(key, value)| (Key::Name(key), value)),
            Entries::Scalar => None,
        }
    }
}

/// Iterate the entries of `value` in order.
pub fn entries(value: &Value) -> Entries<'_> {
    match value {
        Value::Array(items) => Entries::Sequence(items.iter().enumerate()),
        Value::Object(map) => Entries::Mapping(map.iter()),
        _ => Entries::Scalar,
    }
}

/// Determine whether the given value can be indexed (a sequence or a mapping).
pub fn accessible(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Determine whether `key` exists directly inside `value`.
///
/// Existence is checked, not non-nullness: a key holding `null` exists.
pub fn exists(value: &Value, key: &str) -> bool {
    child(value, key).is_some()
}

/// Number of entries in an accessible node; zero for scalars.
pub fn container_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

/// Parse a canonical sequence index.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

pub(crate) fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

pub(crate) fn child_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => parse_index(segment).and_then(move |index| items.get_mut(index)),
        _ => None,
    }
}

/// Remove `segment` from `value`, returning the removed node.
///
/// Every other entry keeps its key. Mapping entries keep the order of their
/// siblings. A sequence only stays a sequence when its last element goes;
/// otherwise the survivors become a mapping keyed by their old indices.
pub(crate) fn remove_child(value: &mut Value, segment: &str) -> Option<Value> {
    if let Value::Array(items) = value {
        let index = parse_index(segment).filter(|&index| index < items.len())?;
        if index + 1 == items.len() {
            return items.pop();
        }
        return ensure_mapping(value).shift_remove(segment);
    }
    match value {
        Value::Object(map) => map.shift_remove(segment),
        _ => None,
    }
}

/// Empty container for a missing slot: a sequence when it will be filled
/// from index `0`, a mapping otherwise.
pub(crate) fn empty_container_for(next_segment: &str) -> Value {
    if parse_index(next_segment) == Some(0) {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Return the slot for `segment` inside `container`, inserting `null` when absent.
///
/// A scalar container is replaced with an empty mapping. A sequence that cannot
/// take `segment` as an index (or as the next index) becomes a mapping keyed by
/// its former indices.
pub(crate) fn slot<'a>(container: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match &*container {
        Value::Array(items) => parse_index(segment).filter(|&index| index <= items.len()),
        _ => None,
    };
    let Some(index) = index else {
        return ensure_mapping(container).entry(segment).or_insert(Value::Null);
    };
    match container {
        Value::Array(items) => {
            if index == items.len() {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        _ => ensure_mapping(container).entry(segment).or_insert(Value::Null),
    }
}

/// Make `value` a mapping: sequences keep their elements under their indices,
/// scalars are discarded.
pub(crate) fn ensure_mapping(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        let map = match std::mem::take(value) {
            Value::Array(items) => renumber(items),
            _ => Map::new(),
        };
        *value = Value::Object(map);
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("non-mapping values are replaced above"),
    }
}

/// Returns true if the keys of `map` are exactly `"0"` to `"n-1"` in order.
pub(crate) fn is_positional(map: &Map<String, Value>) -> bool {
    map.keys()
        .enumerate()
        .all(|(position, key)| parse_index(key) == Some(position))
}

/// Key a list of values by `"0"`, `"1"`, ...
pub(crate) fn renumber(items: impl IntoIterator<Item = Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), value))
        .collect()
}

/// Stringify a node so it can be used as a mapping key.
///
/// Containers have no key form and yield `None`.
pub(crate) fn key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(integral(n)),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

// Fractional keys are truncated toward zero.
fn integral(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        n.to_string()
    } else {
        (n.as_f64().unwrap_or_default().trunc() as i64).to_string()
    }
}

/// Total order over nodes: null < bool < number < string < sequence < mapping.
///
/// Sequences compare element-wise, mappings by size then entry by entry.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::Number(l), Value::Number(r)) => compare_numbers(l, r),
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Array(l), Value::Array(r)) => l
            .iter()
            .zip(r)
            .map(|(x, y)| compare_values(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| l.len().cmp(&r.len())),
        (Value::Object(l), Value::Object(r)) => l.len().cmp(&r.len()).then_with(|| {
            l.iter()
                .zip(r)
                .map(|((lk, lv), (rk, rv))| compare_keys(lk, rk).then_with(|| compare_values(lv, rv)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Order mapping keys: integer-looking keys first in numeric order, then the
/// remaining keys as text.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn compare_numbers(l: &Number, r: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (l.as_i64(), r.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (l.as_u64(), r.as_u64()) {
        return x.cmp(&y);
    }
    let x = l.as_f64().unwrap_or_default();
    let y = r.as_f64().unwrap_or_default();
    x.total_cmp(&y)
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
