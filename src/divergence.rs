//! Descriptions of what an assertion expected
//!
//! Every built-in assertion attaches a [`Divergence`] to its outcome, on the
//! success branch as well as the failure branch. The divergence reads as the
//! claim the assertion made:
//!
//! ```
//! use alright::{assertion::equals, Assertion};
//!
//! let outcome = equals(2).check(&1);
//! let divergence = outcome.get_failure().unwrap();
//! assert_eq!(divergence.to_string(), "Expected 1 to equal 2");
//! ```
//!
//! Negating an assertion swaps the outcome and inverts the claim, so the same
//! description stays accurate:
//!
//! ```
//! use alright::{assertion::equals, Assertion, AssertionExt};
//!
//! let outcome = equals(1).not().check(&1);
//! assert_eq!(outcome.get_failure().unwrap().to_string(), "Expected 1 not to equal 1");
//! ```

use std::borrow::Cow;
use std::fmt;

/// The claim an assertion made about a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Divergence {
    actual: String,
    relation: Cow<'static, str>,
    expected: Option<String>,
    negated: bool,
}

impl Divergence {
    /// Describe a one-sided claim about `actual`, e.g. `to be truthy`.
    pub fn new(actual: &(impl fmt::Debug + ?Sized), relation: impl Into<Cow<'static, str>>) -> Self {
        Divergence {
            actual: format!("{:?}", actual),
            relation: relation.into(),
            expected: None,
            negated: false,
        }
    }

    /// Describe a claim relating `actual` to `expected`, e.g. `to equal`.
    pub fn between(
        actual: &(impl fmt::Debug + ?Sized),
        relation: impl Into<Cow<'static, str>>,
        expected: &(impl fmt::Debug + ?Sized),
    ) -> Self {
        Divergence::new(actual, relation).with_expected(format!("{:?}", expected))
    }

    /// Attach an already rendered expectation.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Flip the claim: `to equal` becomes `not to equal` and back.
    pub fn invert(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The rendered subject of the claim.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// The relation phrase, without negation.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// The rendered expectation, if the claim has one.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Whether the claim has been inverted.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected {} ", self.actual)?;
        if self.negated {
            f.write_str("not ")?;
        }
        f.write_str(&self.relation)?;
        if let Some(expected) = &self.expected {
            write!(f, " {}", expected)?;
        }
        Ok(())
    }
}
