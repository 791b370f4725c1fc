//! Path-based reads and writes over nested values.
//!
//! Responsibilities:
//! - Resolve, write, test and remove entries addressed by delimiter-separated paths.
//! - Flatten a nested value into dotted keys and rebuild it again.
//! - Pluck and sort collections by a path inside each element.
//!
//! Does NOT handle:
//! - Whole-container transforms that take no path (see `select.rs`, `flatten.rs`,
//!   `order.rs`, `random.rs`).
//!
//! Invariants:
//! - Missing paths never fail; reads fall back to the caller's default, which is
//!   only evaluated when needed.
//! - A key that exists literally at the top level (delimiter included) wins over
//!   the segment walk.
//! - Writes create intermediate containers, overwriting any scalar that stands
//!   in the way.
//! - Removing an entry never moves another entry to a different key.
//! - Nothing is cached between calls.

use serde_json::{Map, Value};
use tracing::debug;

use crate::node::{
    accessible, child, child_mut, compare_values, container_len, empty_container_for, entries,
    is_positional, key_string, remove_child, slot,
};
use crate::path::{DEFAULT_DELIMITER, Path};

/// Reads and writes nested values through delimiter-separated paths.
///
/// The accessor only carries the delimiter, so it is cheap to copy and can be
/// shared freely.
///
/// ```
/// use dotpath::PathAccessor;
/// use serde_json::json;
///
/// let mut config = json!({"db": {"host": "localhost"}});
/// let paths = PathAccessor::new();
///
/// assert_eq!(paths.get(&config, Some("db.host")), Some(&json!("localhost")));
/// paths.set(&mut config, Some("db.port"), json!(5432));
/// assert!(paths.has(&config, ["db.host", "db.port"]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathAccessor {
    delimiter: char,
}

impl Default for PathAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAccessor {
    /// Create an accessor that splits paths on `.`.
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Create an accessor that splits paths on `delimiter`.
    pub const fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parse `raw` with this accessor's delimiter.
    pub fn path<'a>(&self, raw: &'a str) -> Path<'a> {
        Path::parse(raw, self.delimiter)
    }

    /// Get an item using delimiter notation.
    ///
    /// `None` as the key returns the whole target. Non-accessible targets never
    /// resolve.
    pub fn get<'a>(&self, target: &'a Value, key: Option<&str>) -> Option<&'a Value> {
        if !accessible(target) {
            return None;
        }
        let Some(key) = key else {
            return Some(target);
        };
        if let Some(found) = child(target, key) {
            return Some(found);
        }
        if !key.contains(self.delimiter) {
            return None;
        }
        self.walk(target, &self.path(key))
    }

    /// Get an item, cloning it, or `default` when it is missing.
    pub fn get_or(&self, target: &Value, key: Option<&str>, default: Value) -> Value {
        self.get(target, key).cloned().unwrap_or(default)
    }

    /// Get an item, cloning it, or the result of `default` when it is missing.
    pub fn get_or_else<F>(&self, target: &Value, key: Option<&str>, default: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        self.get(target, key).cloned().unwrap_or_else(default)
    }

    /// Set an item to a given value using delimiter notation.
    ///
    /// With no key the entire target is replaced. Intermediate segments that are
    /// missing or hold a scalar become empty containers: a sequence when the
    /// next segment is `0`, a mapping otherwise.
    pub fn set(&self, target: &mut Value, key: Option<&str>, value: Value) {
        let Some(key) = key else {
            *target = value;
            return;
        };
        let path = self.path(key);
        let Some((last, parents)) = path.split_last() else {
            return;
        };

        let mut current = target;
        for (position, segment) in parents.iter().enumerate() {
            let next = parents.get(position + 1).copied().unwrap_or(last);
            current = slot(current, segment);
            if !accessible(current) {
                if !current.is_null() {
                    debug!(path = %path, segment = %segment, "overwriting scalar with container");
                }
                *current = empty_container_for(next);
            }
        }
        *slot(current, last) = value;
    }

    /// Check if every key exists in the target, literally or via segment walk.
    ///
    /// An empty target or an empty key list never has anything.
    pub fn has<I>(&self, target: &Value, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if container_len(target) == 0 {
            return false;
        }
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() {
            return false;
        }
        keys.all(|key| {
            let key = key.as_ref();
            child(target, key).is_some() || self.walk(target, &self.path(key)).is_some()
        })
    }

    /// Remove one or many items using delimiter notation.
    ///
    /// Every key is walked from the root again, so an earlier removal that
    /// reshaped the target cannot leave the walk pointing at stale data. A key
    /// whose parent cannot be reached is skipped.
    pub fn forget<I>(&self, target: &mut Value, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        'keys: for key in keys {
            let key = key.as_ref();
            if child(target, key).is_some() {
                remove_child(target, key);
                continue;
            }

            let path = self.path(key);
            let Some((last, parents)) = path.split_last() else {
                continue;
            };
            let mut current = &mut *target;
            for segment in parents {
                match child_mut(current, segment) {
                    Some(next) if accessible(next) => current = next,
                    _ => {
                        debug!(path = %path, segment = %segment, "forget target not reachable");
                        continue 'keys;
                    }
                }
            }
            remove_child(current, last);
        }
    }

    /// Get a value from the target and remove it.
    pub fn pull(&self, target: &mut Value, key: &str, default: Value) -> Value {
        self.pull_or_else(target, key, || default)
    }

    /// Like [`pull`](Self::pull) with a lazily produced default.
    pub fn pull_or_else<F>(&self, target: &mut Value, key: &str, default: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        let value = self.get_or_else(target, Some(key), default);
        self.forget(target, [key]);
        value
    }

    /// Set `value` at `key` unless something other than `null` is already there.
    ///
    /// Returns whether the value was written.
    pub fn add(&self, target: &mut Value, key: &str, value: Value) -> bool {
        if self.get(target, Some(key)).is_none_or(Value::is_null) {
            self.set(target, Some(key), value);
            true
        } else {
            false
        }
    }

    /// Flatten a nested value into a single-level mapping of delimiter-joined keys.
    ///
    /// Empty containers are kept as leaves so they survive the trip.
    pub fn dot(&self, target: &Value, prefix: &str) -> Map<String, Value> {
        let mut results = Map::new();
        self.dot_into(target, prefix, &mut results);
        results
    }

    fn dot_into(&self, target: &Value, prefix: &str, results: &mut Map<String, Value>) {
        for (key, value) in entries(target) {
            let flat_key = format!("{prefix}{key}");
            if container_len(value) > 0 {
                let nested_prefix = format!("{flat_key}{}", self.delimiter);
                self.dot_into(value, &nested_prefix, results);
            } else {
                results.insert(flat_key, value.clone());
            }
        }
    }

    /// Expand a mapping of delimiter-joined keys into a nested value.
    ///
    /// Runs of index keys counting up from `0` rebuild sequences, so the
    /// output of [`dot`](Self::dot) expands back to the value it came from.
    pub fn undot(&self, flat: &Map<String, Value>) -> Value {
        let mut results = Value::Object(Map::new());
        for (key, value) in flat {
            self.set(&mut results, Some(key), value.clone());
        }
        match results {
            Value::Object(map) if !map.is_empty() && is_positional(&map) => {
                Value::Array(map.into_iter().map(|(_, value)| value).collect())
            }
            other => other,
        }
    }

    /// Pluck the value at `value_path` from every element.
    ///
    /// Without `key_path` the values form a sequence. With it, each value is
    /// keyed by the stringified node at `key_path`; later duplicates overwrite
    /// earlier ones. Elements whose key is a container are skipped.
    pub fn pluck(&self, target: &Value, value_path: &str, key_path: Option<&str>) -> Value {
        let Some(key_path) = key_path else {
            return Value::Array(
                entries(target)
                    .map(|(_, item)| self.get_or(item, Some(value_path), Value::Null))
                    .collect(),
            );
        };

        let mut results = Map::new();
        for (position, item) in entries(target) {
            let item_value = self.get_or(item, Some(value_path), Value::Null);
            let item_key = self.get(item, Some(key_path)).unwrap_or(&Value::Null);
            match key_string(item_key) {
                Some(item_key) => {
                    results.insert(item_key, item_value);
                }
                None => debug!(
                    position = %position,
                    key_path,
                    "skipping element whose key is not a scalar"
                ),
            }
        }
        Value::Object(results)
    }

    /// Stable-sort the entries of `target` by the value each holds at `key`.
    ///
    /// Keys are preserved: a mapping stays a mapping in the new order, a
    /// sequence is returned re-ordered. Missing values sort as `null`.
    pub fn sort_by(&self, target: &Value, key: &str) -> Value {
        let sort_key = |item: &Value| self.get(item, Some(key)).unwrap_or(&Value::Null).clone();
        match target {
            Value::Array(items) => {
                let mut keyed: Vec<(Value, &Value)> =
                    items.iter().map(|item| (sort_key(item), item)).collect();
                keyed.sort_by(|(a, _), (b, _)| compare_values(a, b));
                Value::Array(keyed.into_iter().map(|(_, item)| item.clone()).collect())
            }
            Value::Object(map) => {
                let mut keyed: Vec<(Value, &String, &Value)> = map
                    .iter()
                    .map(|(name, item)| (sort_key(item), name, item))
                    .collect();
                keyed.sort_by(|(a, _, _), (b, _, _)| compare_values(a, b));
                Value::Object(
                    keyed
                        .into_iter()
                        .map(|(_, name, item)| (name.clone(), item.clone()))
                        .collect(),
                )
            }
            other => other.clone(),
        }
    }

    fn walk<'a>(&self, target: &'a Value, path: &Path<'_>) -> Option<&'a Value> {
        path.segments()
            .iter()
            .try_fold(target, |current, segment| child(current, segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths() -> PathAccessor {
        PathAccessor::new()
    }

    #[test]
    fn test_get_nested_and_missing() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(paths().get(&value, Some("a.b")), Some(&json!(1)));
        assert_eq!(paths().get_or(&value, Some("a.c"), json!("X")), json!("X"));
    }

    #[test]
    fn test_get_without_key_returns_whole_target() {
        let value = json!({"a": 1});
        assert_eq!(paths().get(&value, None), Some(&value));
    }

    #[test]
    fn test_get_on_scalar_uses_default() {
        assert_eq!(paths().get(&json!(3), None), None);
        assert_eq!(paths().get_or(&json!("text"), Some("a"), json!(0)), json!(0));
    }

    #[test]
    fn test_get_prefers_literal_key_with_delimiter() {
        let value = json!({"a.b": "literal", "a": {"b": "nested"}});
        assert_eq!(paths().get(&value, Some("a.b")), Some(&json!("literal")));
    }

    #[test]
    fn test_get_indexes_into_sequences() {
        let value = json!({"users": [{"name": "ada"}, {"name": "bob"}]});
        assert_eq!(paths().get(&value, Some("users.1.name")), Some(&json!("bob")));
        assert_eq!(paths().get(&value, Some("users.2.name")), None);
    }

    #[test]
    fn test_get_or_else_is_lazy() {
        let value = json!({"present": true});
        let mut calls = 0;
        let found = paths().get_or_else(&value, Some("present"), || {
            calls += 1;
            json!(false)
        });
        assert_eq!(found, json!(true));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_set_creates_intermediate_mappings() {
        let mut value = json!({});
        paths().set(&mut value, Some("a.b.c"), json!(1));
        assert_eq!(value, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_overwrites_scalar_intermediate() {
        let mut value = json!({"a": "scalar"});
        paths().set(&mut value, Some("a.b"), json!(2));
        assert_eq!(value, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_set_without_key_replaces_target() {
        let mut value = json!({"a": 1});
        paths().set(&mut value, None, json!([1, 2]));
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_set_into_sequence_index() {
        let mut value = json!({"list": [1, 2]});
        paths().set(&mut value, Some("list.0"), json!(9));
        paths().set(&mut value, Some("list.2"), json!(3));
        assert_eq!(value, json!({"list": [9, 2, 3]}));
    }

    #[test]
    fn test_set_with_custom_delimiter() {
        let mut value = json!({});
        let accessor = PathAccessor::with_delimiter('/');
        accessor.set(&mut value, Some("a/b.c"), json!(true));
        assert_eq!(value, json!({"a": {"b.c": true}}));
    }

    #[test]
    fn test_has_requires_every_key() {
        let value = json!({"a": {"b": null}, "c": 1});
        assert!(paths().has(&value, ["a.b"]));
        assert!(paths().has(&value, ["a.b", "c"]));
        assert!(!paths().has(&value, ["a.b", "d"]));
    }

    #[test]
    fn test_has_rejects_empty_inputs() {
        assert!(!paths().has(&json!({}), ["a"]));
        assert!(!paths().has(&json!({"a": 1}), Vec::<&str>::new()));
        assert!(!paths().has(&json!(1), ["a"]));
    }

    #[test]
    fn test_forget_nested_keeps_siblings() {
        let mut value = json!({"a": {"b": 1, "c": 2}});
        paths().forget(&mut value, ["a.b"]);
        assert_eq!(value, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_forget_literal_key_first() {
        let mut value = json!({"a.b": 1, "a": {"b": 2}});
        paths().forget(&mut value, ["a.b"]);
        assert_eq!(value, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_forget_unreachable_path_is_noop() {
        let mut value = json!({"a": 1});
        paths().forget(&mut value, ["a.b.c", "x.y"]);
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_forget_many_keys_reroots_each_time() {
        let mut value = json!({"a": {"b": {"c": 1}}, "d": 2});
        paths().forget(&mut value, ["a.b", "a.b.c", "d"]);
        assert_eq!(value, json!({"a": {}}));
    }

    #[test]
    fn test_forget_sequence_element_keeps_other_indices() {
        let mut value = json!({"list": ["x", "y", "z"]});
        paths().forget(&mut value, ["list.0"]);
        assert_eq!(value, json!({"list": {"1": "y", "2": "z"}}));
        assert!(!paths().has(&value, ["list.0"]));
        assert_eq!(paths().get(&value, Some("list.2")), Some(&json!("z")));
    }

    #[test]
    fn test_forget_last_sequence_element_stays_sequence() {
        let mut value = json!({"list": ["x", "y"]});
        paths().forget(&mut value, ["list.1"]);
        assert_eq!(value, json!({"list": ["x"]}));
    }

    #[test]
    fn test_forget_several_sequence_elements() {
        let mut value = json!(["x", "y", "z"]);
        paths().forget(&mut value, ["0", "1"]);
        assert_eq!(value, json!({"2": "z"}));

        let mut value = json!({"list": ["x", "y"]});
        paths().forget(&mut value, ["list.0"]);
        assert!(!paths().has(&value, ["list.0"]));
        assert!(paths().has(&value, ["list.1"]));
    }

    #[test]
    fn test_pull_returns_and_removes() {
        let mut value = json!({"a": {"b": 1}});
        assert_eq!(paths().pull(&mut value, "a.b", Value::Null), json!(1));
        assert_eq!(value, json!({"a": {}}));
        assert_eq!(paths().pull(&mut value, "a.b", json!("gone")), json!("gone"));
    }

    #[test]
    fn test_add_only_fills_missing_or_null() {
        let mut value = json!({"a": null, "b": 1});
        assert!(paths().add(&mut value, "a", json!("filled")));
        assert!(!paths().add(&mut value, "b", json!(2)));
        assert!(paths().add(&mut value, "c.d", json!(3)));
        assert_eq!(value, json!({"a": "filled", "b": 1, "c": {"d": 3}}));
    }

    #[test]
    fn test_dot_keeps_empty_containers() {
        let value = json!({"a": {"b": 1, "c": {}}, "d": [], "e": [10, 20]});
        let flat = paths().dot(&value, "");
        assert_eq!(
            Value::Object(flat),
            json!({"a.b": 1, "a.c": {}, "d": [], "e.0": 10, "e.1": 20})
        );
    }

    #[test]
    fn test_dot_with_prefix() {
        let flat = paths().dot(&json!({"a": 1}), "app.");
        assert_eq!(Value::Object(flat), json!({"app.a": 1}));
    }

    #[test]
    fn test_undot_rebuilds_nesting() {
        let value = json!({"a": {"b": 1, "c": {"d": "x"}}, "e": {}});
        let accessor = paths();
        assert_eq!(accessor.undot(&accessor.dot(&value, "")), value);
    }

    #[test]
    fn test_undot_rebuilds_sequences() {
        let accessor = paths();
        let value = json!({"e": [10, 20], "m": [[1], {"k": []}], "z": {}});
        assert_eq!(accessor.undot(&accessor.dot(&value, "")), value);

        let list = json!(["a", {"b": [true]}]);
        assert_eq!(accessor.undot(&accessor.dot(&list, "")), list);
    }

    #[test]
    fn test_set_missing_slot_before_index_zero_creates_sequence() {
        let mut value = json!({});
        paths().set(&mut value, Some("a.0.b"), json!(1));
        paths().set(&mut value, Some("c.1"), json!(2));
        assert_eq!(value, json!({"a": [{"b": 1}], "c": {"1": 2}}));
    }

    #[test]
    fn test_pluck_values_and_keys() {
        let users = json!([
            {"id": 1, "name": "ada", "team": {"name": "core"}},
            {"id": 2, "name": "bob", "team": {"name": "web"}},
        ]);
        assert_eq!(paths().pluck(&users, "name", None), json!(["ada", "bob"]));
        assert_eq!(
            paths().pluck(&users, "team.name", Some("id")),
            json!({"1": "core", "2": "web"})
        );
    }

    #[test]
    fn test_pluck_duplicate_keys_overwrite() {
        let rows = json!([{"k": "a", "v": 1}, {"k": "a", "v": 2}, {"k": "b", "v": 3}]);
        assert_eq!(paths().pluck(&rows, "v", Some("k")), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn test_pluck_skips_container_keys() {
        let rows = json!([{"k": [1], "v": 1}, {"k": "ok", "v": 2}]);
        assert_eq!(paths().pluck(&rows, "v", Some("k")), json!({"ok": 2}));
    }

    #[test]
    fn test_sort_by_nested_path() {
        let rows = json!({
            "x": {"meta": {"rank": 3}},
            "y": {"meta": {"rank": 1}},
            "z": {"meta": {"rank": 2}},
        });
        let sorted = paths().sort_by(&rows, "meta.rank");
        let keys: Vec<_> = sorted.as_object().map(|m| m.keys().cloned().collect()).unwrap_or_default();
        assert_eq!(keys, vec!["y", "z", "x"]);
    }
}
