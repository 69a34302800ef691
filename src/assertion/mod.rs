//! Assertions that produce validations instead of panicking
//!
//! An assertion evaluates a predicate and wraps the outcome in a
//! [`Validation`]. A false predicate is represented as `Failure`, never
//! raised; the caller decides what to do with it (inspect it, combine it,
//! negate it, or [`verify`] it into an error).
//!
//! Built-in assertions return an [`Outcome`]: the same [`Divergence`]
//! describing the claim is carried on whichever branch was taken.
//!
//! # Example
//!
//! ```rust
//! use alright::assertion::*;
//! use alright::{Class, TypeTag, Value};
//!
//! let user = Value::object([("name", Value::from("ada")), ("langs", Value::array(["en", "fr"]))]);
//!
//! assert!(has("name").check(&user).is_success());
//! assert!(is_of_class(Class::Object).check(&user).is_success());
//! assert!(is_of_type(TypeTag::Object).check(&Value::Null).is_success());
//! assert!(contains(Value::from("fr")).check(user.get("langs").unwrap()).is_success());
//! assert!(not(has("email")).check(&user).is_success());
//! ```
//!
//! # Plain conditions
//!
//! [`assert`] wraps any boolean with any payload:
//!
//! ```rust
//! use alright::assertion::assert;
//!
//! assert_eq!(assert(true, "D").get(), Ok(&"D"));
//! assert_eq!(assert(false, "D").swap().get(), Ok(&"D"));
//! ```

mod collection;
mod combinators;
mod equality;
mod pattern;
mod types;

use std::fmt;

use crate::error::AssertionError;
use crate::{Divergence, Validation};

pub use collection::{contains, has, Contains, Has};
pub use combinators::{not, Assertion, AssertionExt, Not};
pub use equality::{equals, ok, strict_equals, truthy, Equals, StrictEquals, Truthy};
pub use pattern::{matches, Matches, Pattern};
pub use types::{is_of_class, is_of_type, IsOfClass, IsOfType};

/// The result of a built-in assertion.
pub type Outcome = Validation<Divergence, Divergence>;

/// Turn a condition into a validation carrying `divergence` on either branch.
///
/// # Example
///
/// ```rust
/// use alright::assertion::assert;
///
/// let v = assert(1 + 1 == 2, "arithmetic holds");
/// assert!(v.is_success());
/// assert_eq!(v.into_inner(), "arithmetic holds");
/// ```
#[inline]
pub fn assert<F>(condition: bool, divergence: F) -> Validation<F, F> {
    if condition {
        Validation::success(divergence)
    } else {
        Validation::failure(divergence)
    }
}

/// Turn a failed validation into an [`AssertionError`].
///
/// Successes pass their payload through, so `verify` composes with `?`.
/// With the `tracing` feature enabled, failures are logged at debug level.
///
/// # Example
///
/// ```rust
/// use alright::assertion::{equals, verify, Assertion};
///
/// fn check_total(total: i32) -> Result<(), alright::error::AssertionError<alright::Divergence>> {
///     verify(equals(10).check(&total))?;
///     Ok(())
/// }
///
/// assert!(check_total(10).is_ok());
/// assert_eq!(
///     check_total(9).unwrap_err().to_string(),
///     "assertion failed: Expected 9 to equal 10"
/// );
/// ```
pub fn verify<S, F>(validation: Validation<S, F>) -> Result<S, AssertionError<F>>
where
    F: fmt::Display,
{
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(divergence) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(divergence = %divergence, "assertion failed");
            Err(AssertionError::new(divergence))
        }
    }
}
