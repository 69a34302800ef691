//! Validation type: an outcome that is either a `Success` or a `Failure`
//!
//! This module provides the `Validation` type. Every assertion in this crate
//! produces one: a false predicate is *represented* as `Failure`, never raised.
//! Unlike `Result`, both variants are first class. A validation can be swapped
//! (success becomes failure and vice versa), which is how assertions are negated.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use alright::Validation;
//!
//! let success = Validation::<_, &str>::success(42);
//! let failure = Validation::<i32, _>::failure("error");
//!
//! assert!(success.is_success());
//! assert!(failure.is_failure());
//! assert_eq!(success.get(), Ok(&42));
//! ```
//!
//! ## Swapping
//!
//! ```
//! use alright::Validation;
//!
//! let v = Validation::<i32, &str>::failure("divergence");
//! assert_eq!(v.swap(), Validation::Success("divergence"));
//! ```
//!
//! ## Accumulating failures
//!
//! ```
//! use alright::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["error1"]);
//! let v2 = Validation::<i32, _>::failure(vec!["error2"]);
//!
//! assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
//! ```

use crate::error::{InvalidStateError, Variant};
use crate::Semigroup;

/// An outcome that either succeeded with an `S` or failed with an `F`.
///
/// Equality is structural: two validations are equal when they hold the same
/// variant and their payloads are equal.
///
/// # Type Parameters
///
/// * `S` - The type of the success payload
/// * `F` - The type of the failure payload
///
/// # Examples
///
/// ```
/// use alright::Validation;
///
/// let v = Validation::<_, &str>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let v = Validation::<i32, _>::failure("error");
/// assert_eq!(v.swap().swap(), Validation::Failure("error"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<S, F> {
    /// Successful outcome
    Success(S),
    /// Failed outcome
    Failure(F),
}

impl<S, F> Validation<S, F> {
    /// Create a successful validation
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, String>::success(42);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("error");
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(value: F) -> Self {
        Validation::Failure(value)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(value) => Validation::Failure(value),
        }
    }

    /// Convert this validation to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<_, String>::success(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(value) => Err(value),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Which variant this validation holds.
    #[inline]
    pub fn variant(&self) -> Variant {
        match self {
            Validation::Success(_) => Variant::Success,
            Validation::Failure(_) => Variant::Failure,
        }
    }

    /// Read the success payload.
    ///
    /// Returns [`InvalidStateError`] when called on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<_, &str>::success("D");
    /// assert_eq!(v.get(), Ok(&"D"));
    ///
    /// let v = Validation::<&str, _>::failure("D");
    /// assert!(v.get().is_err());
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&S, InvalidStateError> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(_) => Err(InvalidStateError::new(Variant::Success)),
        }
    }

    /// Read the failure payload.
    ///
    /// Returns [`InvalidStateError`] when called on a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, _>::failure("D");
    /// assert_eq!(v.get_failure(), Ok(&"D"));
    /// ```
    #[inline]
    pub fn get_failure(&self) -> Result<&F, InvalidStateError> {
        match self {
            Validation::Failure(value) => Ok(value),
            Validation::Success(_) => Err(InvalidStateError::new(Variant::Failure)),
        }
    }

    /// Exchange the variants: `Success(v)` becomes `Failure(v)` and vice versa.
    ///
    /// Swapping twice gives back the original validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<_, &str>::success(1);
    /// assert_eq!(v.swap(), Validation::Failure(1));
    /// assert_eq!(v.swap().swap(), v);
    /// ```
    #[inline]
    pub fn swap(self) -> Validation<F, S> {
        match self {
            Validation::Success(value) => Validation::Failure(value),
            Validation::Failure(value) => Validation::Success(value),
        }
    }

    /// Borrow both payloads
    #[inline]
    pub fn as_ref(&self) -> Validation<&S, &F> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(value) => Validation::Failure(value),
        }
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, G>(self, f: G) -> Validation<U, F>
    where
        G: FnOnce(S) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(value) => Validation::Failure(value),
        }
    }

    /// Transform the failure value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<F2, G>(self, f: G) -> Validation<S, F2>
    where
        G: FnOnce(F) -> F2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(value) => Validation::Failure(f(value)),
        }
    }

    /// Transform whichever payload is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, i32>::failure(3);
    /// assert_eq!(v.bimap(|s| s + 1, |f| f * 2), Validation::Failure(6));
    /// ```
    #[inline]
    pub fn bimap<S2, F2, G, H>(self, on_success: G, on_failure: H) -> Validation<S2, F2>
    where
        G: FnOnce(S) -> S2,
        H: FnOnce(F) -> F2,
    {
        match self {
            Validation::Success(value) => Validation::Success(on_success(value)),
            Validation::Failure(value) => Validation::Failure(on_failure(value)),
        }
    }

    /// Collapse both variants into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("bad");
    /// let n = v.fold(|s| s as usize, |f| f.len());
    /// assert_eq!(n, 3);
    /// ```
    #[inline]
    pub fn fold<T, G, H>(self, on_success: G, on_failure: H) -> T
    where
        G: FnOnce(S) -> T,
        H: FnOnce(F) -> T,
    {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(value) => on_failure(value),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v = Validation::<_, &str>::success(5);
    /// let result = v.and_then(|x| {
    ///     if x > 0 {
    ///         Validation::success(x * 2)
    ///     } else {
    ///         Validation::failure("must be positive")
    ///     }
    /// });
    /// assert_eq!(result, Validation::Success(10));
    /// ```
    #[inline]
    pub fn and_then<U, G>(self, f: G) -> Validation<U, F>
    where
        G: FnOnce(S) -> Validation<U, F>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(value) => Validation::Failure(value),
        }
    }
}

impl<T> Validation<T, T> {
    /// Read the payload regardless of the variant.
    ///
    /// Assertions built with [`assert`](crate::assertion::assert) carry the same
    /// payload on both branches, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// assert_eq!(Validation::<_, &str>::failure("D").into_inner(), "D");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Validation::Success(value) | Validation::Failure(value) => value,
        }
    }
}

impl<S, F: Semigroup> Validation<S, F> {
    /// Combine two validations, accumulating failures using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the failures using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    /// ```
    pub fn and<U>(self, other: Validation<U, F>) -> Validation<(S, U), F> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns a success with a Vec of all success values if all validations succeed.
    /// Otherwise, accumulates every failure using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alright::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<S, F>>) -> Validation<Vec<S>, F> {
        let mut successes = Vec::new();
        let mut failures: Option<F> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failures {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

impl<S, F> From<Result<S, F>> for Validation<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Validation::from_result(result)
    }
}

impl<S, F> From<Validation<S, F>> for Result<S, F> {
    fn from(validation: Validation<S, F>) -> Self {
        validation.into_result()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32, fail: bool) {
            let v: Validation<i32, i32> = if fail {
                Validation::failure(x)
            } else {
                Validation::success(x)
            };
            prop_assert_eq!(v.swap().swap(), v);
        }

        #[test]
        fn prop_exactly_one_variant(x: i32, fail: bool) {
            let v: Validation<i32, String> = if fail {
                Validation::failure(x.to_string())
            } else {
                Validation::success(x)
            };
            prop_assert_ne!(v.is_success(), v.is_failure());
            prop_assert_eq!(v.get().is_ok(), v.is_success());
            prop_assert_eq!(v.get_failure().is_ok(), v.is_failure());
        }

        #[test]
        fn prop_swap_flips_variant(x: i32) {
            let v: Validation<i32, ()> = Validation::success(x);
            prop_assert_eq!(v.swap().variant(), v.variant().opposite());
        }

        #[test]
        fn prop_bimap_swap_commutes(x: i32, fail: bool) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let v: Validation<i32, i32> = if fail {
                Validation::failure(x)
            } else {
                Validation::success(x)
            };
            prop_assert_eq!(v.bimap(f, g).swap(), v.swap().bimap(g, f));
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let v: Validation<i32, ()> = Validation::success(x);
            let result: Result<i32, ()> = v.into();
            let back: Validation<i32, ()> = result.into();
            prop_assert_eq!(back, v);
        }
    }
}
