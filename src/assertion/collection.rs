//! Membership and key-presence assertions

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::BuildHasher;

use super::{assert, Assertion, Outcome};
use crate::{Divergence, Value};

/// Assertion that a collection contains an element.
#[derive(Clone, Copy, Debug)]
pub struct Contains<T> {
    element: T,
}

impl<T> Contains<T> {
    fn outcome<C: Debug + ?Sized>(&self, found: bool, collection: &C) -> Outcome
    where
        T: Debug,
    {
        assert(
            found,
            Divergence::between(collection, "to contain", &self.element),
        )
    }
}

impl<T: PartialEq + Debug> Assertion<[T]> for Contains<T> {
    fn check(&self, actual: &[T]) -> Outcome {
        self.outcome(actual.contains(&self.element), actual)
    }
}

impl<T: PartialEq + Debug> Assertion<Vec<T>> for Contains<T> {
    fn check(&self, actual: &Vec<T>) -> Outcome {
        self.outcome(actual.contains(&self.element), actual)
    }
}

impl<T: PartialEq + Debug, const N: usize> Assertion<[T; N]> for Contains<T> {
    fn check(&self, actual: &[T; N]) -> Outcome {
        self.outcome(actual.contains(&self.element), actual)
    }
}

impl Assertion<Value> for Contains<Value> {
    fn check(&self, actual: &Value) -> Outcome {
        let found = match (actual, &self.element) {
            (Value::Array(items), element) => items.iter().any(|item| item == element),
            (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
            _ => false,
        };
        self.outcome(found, actual)
    }
}

/// Create an assertion that succeeds when the subject contains `element`.
///
/// Membership is equality based: deep equality for [`Value`] arrays,
/// `PartialEq` for slices, vectors and arrays. A [`Value`] string contains
/// another string when it has it as a substring. Any other subject fails.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::Value;
///
/// assert!(contains(2).check(&vec![1, 2, 3]).is_success());
///
/// let list = Value::array([Value::array([1]), Value::from("a")]);
/// assert!(contains(Value::array([1])).check(&list).is_success());
/// assert!(contains(Value::empty_object()).check(&list).is_failure());
/// ```
pub fn contains<T>(element: T) -> Contains<T> {
    Contains { element }
}

/// Assertion that a mapping has an own key.
#[derive(Clone, Debug)]
pub struct Has {
    key: String,
}

impl Has {
    fn outcome<M: Debug + ?Sized>(&self, found: bool, mapping: &M) -> Outcome {
        assert(
            found,
            Divergence::between(mapping, "to have property", &self.key),
        )
    }
}

impl Assertion<Value> for Has {
    fn check(&self, actual: &Value) -> Outcome {
        self.outcome(actual.has_own(&self.key), actual)
    }
}

impl<V: Debug, S: BuildHasher> Assertion<HashMap<String, V, S>> for Has {
    fn check(&self, actual: &HashMap<String, V, S>) -> Outcome {
        self.outcome(actual.contains_key(&self.key), actual)
    }
}

impl<V: Debug> Assertion<BTreeMap<String, V>> for Has {
    fn check(&self, actual: &BTreeMap<String, V>) -> Outcome {
        self.outcome(actual.contains_key(&self.key), actual)
    }
}

/// Create an assertion that succeeds when the subject has own key `key`.
///
/// For [`Value`] see [`Value::has_own`]: object keys, array indices and
/// `length`. Primitives have no own keys.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::Value;
/// use std::collections::HashMap;
///
/// let obj = Value::object([("a", 1)]);
/// assert!(has("a").check(&obj).is_success());
/// assert!(has("b").check(&obj).is_failure());
///
/// let map: HashMap<String, i32> = HashMap::from([("port".to_string(), 80)]);
/// assert!(has("port").check(&map).is_success());
/// ```
pub fn has(key: impl Into<String>) -> Has {
    Has { key: key.into() }
}
