//! Testing utilities for code that produces validations
//!
//! This module provides assertion macros that turn a validation into a test
//! verdict, and (with the `proptest` feature) `Arbitrary` instances for
//! [`Validation`](crate::Validation) and [`Value`](crate::Value).
//!
//! # Examples
//!
//! ```rust
//! use alright::assertion::{equals, Assertion};
//! use alright::{assert_divergence, assert_failure, assert_success};
//!
//! assert_success!(equals(1).check(&1));
//! assert_failure!(equals(1).check(&2));
//! assert_divergence!(equals(1).check(&2), "Expected 2 to equal 1");
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use alright::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use alright::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with a specific payload.
///
/// # Example
///
/// ```rust
/// use alright::{Validation, assert_failure_eq};
///
/// let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_failure_eq!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(payload) => {
                assert_eq!(payload, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a validation fails and its payload renders as `expected`.
///
/// # Example
///
/// ```rust
/// use alright::assertion::{has, Assertion};
/// use alright::{assert_divergence, Value};
///
/// assert_divergence!(
///     has("id").check(&Value::empty_object()),
///     r#"Expected {} to have property "id""#
/// );
/// ```
#[macro_export]
macro_rules! assert_divergence {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(payload) => {
                assert_eq!(payload.to_string(), $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure rendering {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Validation, Value};

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Validation<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Validation::success),
            any_with::<F>(f_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

/// Strategy for arbitrary [`Value`]s: primitives, nested up to a few levels
/// deep in arrays and objects of at most ten entries.
#[cfg(feature = "proptest")]
pub fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 10, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..10).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..10).prop_map(Value::from),
        ]
    })
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any_value().boxed()
    }
}
