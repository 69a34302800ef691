//! Error types for misuse of validations and failed verification
//!
//! A false assertion is never an error by itself: it is a
//! [`Validation::Failure`](crate::Validation::Failure). The types here cover
//! the two cases where a value really has to be rejected:
//!
//! - [`InvalidStateError`] - reading the payload of the wrong variant
//! - [`AssertionError`] - [`verify`](crate::assertion::verify)ing a failed validation
//!
//! # Examples
//!
//! ```
//! use alright::{Validation, error::Variant};
//!
//! let v = Validation::<i32, &str>::failure("nope");
//! let err = v.get().unwrap_err();
//!
//! assert_eq!(err.expected(), Variant::Success);
//! assert_eq!(err.to_string(), "cannot read a Success payload from a Failure");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The two variants of a [`Validation`](crate::Validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `Validation::Success`
    Success,
    /// `Validation::Failure`
    Failure,
}

impl Variant {
    /// The variant on the other side of a swap.
    pub fn opposite(self) -> Self {
        match self {
            Variant::Success => Variant::Failure,
            Variant::Failure => Variant::Success,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Success => f.write_str("Success"),
            Variant::Failure => f.write_str("Failure"),
        }
    }
}

/// Raised when a payload accessor is called on the wrong variant.
///
/// This is a programmer error: the caller should have checked
/// `is_success()` / `is_failure()` or matched on the validation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStateError {
    expected: Variant,
}

impl InvalidStateError {
    /// Create an error for an accessor that required `expected`.
    pub fn new(expected: Variant) -> Self {
        InvalidStateError { expected }
    }

    /// The variant the accessor required.
    pub fn expected(&self) -> Variant {
        self.expected
    }

    /// The variant the validation actually held.
    pub fn found(&self) -> Variant {
        self.expected.opposite()
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot read a {} payload from a {}",
            self.expected,
            self.found()
        )
    }
}

impl StdError for InvalidStateError {}

/// A failed validation turned into an error by [`verify`](crate::assertion::verify).
///
/// Carries the failure payload (for built-in assertions, the
/// [`Divergence`](crate::Divergence) describing what went wrong).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionError<F> {
    divergence: F,
}

impl<F> AssertionError<F> {
    /// Wrap a failure payload.
    pub fn new(divergence: F) -> Self {
        AssertionError { divergence }
    }

    /// Borrow the failure payload.
    pub fn divergence(&self) -> &F {
        &self.divergence
    }

    /// Consume the error and return the failure payload.
    pub fn into_divergence(self) -> F {
        self.divergence
    }
}

impl<F: fmt::Display> fmt::Display for AssertionError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertion failed: {}", self.divergence)
    }
}

impl<F: fmt::Debug + fmt::Display> StdError for AssertionError<F> {}

/// Raised when a type or class name does not name a known tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    kind: &'static str,
    name: String,
}

impl ParseTagError {
    pub(crate) fn new(kind: &'static str, name: impl Into<String>) -> Self {
        ParseTagError {
            kind,
            name: name.into(),
        }
    }

    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} name: {:?}", self.kind, self.name)
    }
}

impl StdError for ParseTagError {}
