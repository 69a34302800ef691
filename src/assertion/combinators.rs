//! Core assertion trait and negation
//!
//! This module provides the foundational `Assertion` trait and the `not`
//! combinator.

use super::Outcome;
use crate::Divergence;

/// A check over values of type `T` that reports its outcome as a validation.
///
/// Closures of type `Fn(&T) -> Outcome` are assertions too, which makes it
/// easy to build domain-specific checks on top of [`assert`](super::assert).
///
/// # Example
///
/// ```rust
/// use alright::assertion::{assert, Assertion, Outcome};
/// use alright::Divergence;
///
/// let even = |n: &i32| assert(n % 2 == 0, Divergence::new(n, "to be even"));
///
/// assert!(even.check(&4).is_success());
/// assert_eq!(
///     even.check(&3).get_failure().unwrap().to_string(),
///     "Expected 3 to be even"
/// );
/// ```
pub trait Assertion<T: ?Sized> {
    /// Evaluate the assertion against `actual`.
    fn check(&self, actual: &T) -> Outcome;
}

impl<T: ?Sized, F> Assertion<T> for F
where
    F: Fn(&T) -> Outcome,
{
    #[inline]
    fn check(&self, actual: &T) -> Outcome {
        self(actual)
    }
}

/// Extension trait for assertion combinators.
///
/// Only usable when the assertion checks a single type; for assertions that
/// accept several subject types (such as [`contains`](super::contains)) use
/// the free function [`not`].
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
///
/// assert!(equals(1).not().check(&2).is_success());
/// ```
pub trait AssertionExt<T: ?Sized>: Assertion<T> + Sized {
    /// Invert the assertion.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, A: Assertion<T>> AssertionExt<T> for A {}

/// NOT combinator - swaps the outcome and inverts its divergence.
#[derive(Clone, Copy, Debug)]
pub struct Not<A>(pub A);

impl<T: ?Sized, A: Assertion<T>> Assertion<T> for Not<A> {
    #[inline]
    fn check(&self, actual: &T) -> Outcome {
        self.0
            .check(actual)
            .swap()
            .bimap(Divergence::invert, Divergence::invert)
    }
}

/// Invert an assertion.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
///
/// let v = not(contains(3)).check(&vec![1, 2]);
/// assert!(v.is_success());
/// assert_eq!(v.get().unwrap().to_string(), "Expected [1, 2] not to contain 3");
/// ```
pub fn not<A>(assertion: A) -> Not<A> {
    Not(assertion)
}
