//! Random selection and shuffling.
//!
//! Every function has a `_with` variant taking the generator, so callers that
//! need reproducible picks can pass a seeded one.

use rand::Rng;
use rand::seq::index;
use serde_json::Value;

use crate::error::{DotPathError, Result};
use crate::node::{container_len, entries};

/// Pick one random element.
///
/// # Errors
///
/// Returns [`DotPathError::InvalidArgument`] when `target` has no elements.
pub fn random_one(target: &Value) -> Result<&Value> {
    random_one_with(target, &mut rand::rng())
}

/// Pick one random element using `rng`.
pub fn random_one_with<'a, R>(target: &'a Value, rng: &mut R) -> Result<&'a Value>
where
    R: Rng + ?Sized,
{
    let mut picked = random_with(target, 1, rng)?;
    picked.pop().ok_or(DotPathError::InvalidArgument {
        requested: 1,
        available: 0,
    })
}

/// Pick `count` distinct elements, returned in their original order.
///
/// A count of zero yields an empty list.
///
/// # Errors
///
/// Returns [`DotPathError::InvalidArgument`] when `count` exceeds the number of
/// elements.
pub fn random(target: &Value, count: usize) -> Result<Vec<&Value>> {
    random_with(target, count, &mut rand::rng())
}

/// Pick `count` distinct elements using `rng`.
pub fn random_with<'a, R>(target: &'a Value, count: usize, rng: &mut R) -> Result<Vec<&'a Value>>
where
    R: Rng + ?Sized,
{
    let available = container_len(target);
    if count > available {
        return Err(DotPathError::InvalidArgument {
            requested: count,
            available,
        });
    }

    let mut picked = index::sample(rng, available, count).into_vec();
    picked.sort_unstable();

    let mut wanted = picked.into_iter().peekable();
    let mut results = Vec::with_capacity(count);
    for (position, (_, value)) in entries(target).enumerate() {
        if wanted.peek() == Some(&position) {
            results.push(value);
            wanted.next();
        }
    }
    Ok(results)
}

/// Shuffle the elements of a container into a new sequence.
///
/// Mapping keys are discarded. Scalars are returned unchanged.
pub fn shuffle(target: Value) -> Value {
    shuffle_with(target, &mut rand::rng())
}

/// Shuffle using `rng`.
pub fn shuffle_with<R>(target: Value, rng: &mut R) -> Value
where
    R: Rng + ?Sized,
{
    let mut slots: Vec<Option<Value>> = match target {
        Value::Array(items) => items.into_iter().map(Some).collect(),
        Value::Object(map) => map.into_iter().map(|(_, value)| Some(value)).collect(),
        scalar => return scalar,
    };
    let order = index::sample(rng, slots.len(), slots.len());
    Value::Array(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_random_too_many_is_invalid_argument() {
        let err = random(&json!([1, 2, 3]), 5).unwrap_err();
        assert_eq!(
            err,
            DotPathError::InvalidArgument {
                requested: 5,
                available: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "You requested 5 items, but there are only 3 items available."
        );
    }

    #[test]
    fn test_random_one_of_empty_fails() {
        assert!(random_one(&json!([])).is_err());
        assert!(random_one(&json!("scalar")).is_err());
    }

    #[test]
    fn test_random_one_is_member() {
        let value = json!({"a": 1, "b": 2, "c": 3});
        let picked = random_one(&value).unwrap();
        assert!([json!(1), json!(2), json!(3)].contains(picked));
    }

    #[test]
    fn test_random_many_without_replacement_in_order() {
        let value = json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        for _ in 0..20 {
            let picked: Vec<i64> = random(&value, 4)
                .unwrap()
                .into_iter()
                .filter_map(Value::as_i64)
                .collect();
            assert_eq!(picked.len(), 4);
            assert!(picked.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_random_zero_and_all() {
        let value = json!(["a", "b"]);
        assert!(random(&value, 0).unwrap().is_empty());
        assert_eq!(random(&value, 2).unwrap(), vec![&json!("a"), &json!("b")]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let shuffled = shuffle(json!({"a": 1, "b": 2, "c": 3}));
        let mut values: Vec<i64> = shuffled
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(shuffle(json!(7)), json!(7));
    }
}
