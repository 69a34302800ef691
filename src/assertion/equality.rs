//! Equality and truthiness assertions

use std::fmt::Debug;

use super::{assert, Assertion, Outcome};
use crate::value::Truthiness;
use crate::{Divergence, Value};

/// Assertion that the subject is structurally equal to an expected value.
#[derive(Clone, Copy, Debug)]
pub struct Equals<T> {
    expected: T,
}

impl<T: PartialEq + Debug> Assertion<T> for Equals<T> {
    #[inline]
    fn check(&self, actual: &T) -> Outcome {
        assert(
            *actual == self.expected,
            Divergence::between(actual, "to equal", &self.expected),
        )
    }
}

/// Create an assertion that succeeds when the subject equals `expected`.
///
/// Equality is `PartialEq`, which for [`Value`] is deep: arrays and objects
/// are compared by contents, not identity.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::Value;
///
/// assert!(equals(vec![1, 2]).check(&vec![1, 2]).is_success());
/// assert!(equals(vec![1, 2]).check(&vec![2, 1]).is_failure());
/// assert!(equals(Value::array([1, 2])).check(&Value::array([1, 2])).is_success());
/// ```
pub fn equals<T>(expected: T) -> Equals<T> {
    Equals { expected }
}

/// Assertion that the subject is strictly (identity) equal to an expected value.
#[derive(Clone, Debug)]
pub struct StrictEquals {
    expected: Value,
}

impl Assertion<Value> for StrictEquals {
    fn check(&self, actual: &Value) -> Outcome {
        assert(
            actual.strict_eq(&self.expected),
            Divergence::between(actual, "to be", &self.expected),
        )
    }
}

/// Create an assertion that succeeds when the subject is strictly equal to
/// `expected`.
///
/// No coercion and no traversal: primitives compare by value, arrays and
/// objects by identity. See [`Value::strict_eq`].
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::Value;
///
/// let list = Value::array([1, 2]);
/// assert!(strict_equals(list.clone()).check(&list).is_success());
/// assert!(strict_equals(Value::array([1, 2])).check(&list).is_failure());
/// assert!(strict_equals(1).check(&Value::from(1)).is_success());
/// ```
pub fn strict_equals(expected: impl Into<Value>) -> StrictEquals {
    StrictEquals {
        expected: expected.into(),
    }
}

/// Assertion that the subject is truthy.
#[derive(Clone, Copy, Default, Debug)]
pub struct Truthy;

impl<T: Truthiness + Debug + ?Sized> Assertion<T> for Truthy {
    #[inline]
    fn check(&self, actual: &T) -> Outcome {
        assert(actual.is_truthy(), Divergence::new(actual, "to be truthy"))
    }
}

/// Create an assertion that succeeds when the subject is truthy.
pub fn truthy() -> Truthy {
    Truthy
}

/// Check that `value` is truthy.
///
/// # Example
///
/// ```rust
/// use alright::assertion::ok;
/// use alright::Value;
///
/// assert!(ok(&Value::array(Vec::<Value>::new())).is_success());
/// assert!(ok(&Value::from("")).is_failure());
/// assert!(ok(&0).is_failure());
/// ```
pub fn ok<T: Truthiness + Debug + ?Sized>(value: &T) -> Outcome {
    Truthy.check(value)
}
