//! Pattern assertions
//!
//! The crate does not ship a pattern language. A [`Pattern`] is anything that
//! can decide whether a string matches; plain closures qualify, and wrapping
//! a regex engine is a one-line impl.

use std::borrow::Cow;

use super::{assert, Assertion, Outcome};
use crate::{Divergence, Value};

/// Something that accepts or rejects strings.
pub trait Pattern {
    /// Whether `text` matches.
    fn is_match(&self, text: &str) -> bool;
}

impl<F> Pattern for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self(text)
    }
}

/// Assertion that a string matches a [`Pattern`].
#[derive(Clone, Debug)]
pub struct Matches<P> {
    pattern: P,
    label: Cow<'static, str>,
}

impl<P> Matches<P> {
    /// Name the pattern in divergences (defaults to `<pattern>`).
    pub fn described(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    fn outcome(&self, found: bool, actual: &(impl std::fmt::Debug + ?Sized)) -> Outcome {
        assert(
            found,
            Divergence::new(actual, "to match").with_expected(self.label.as_ref()),
        )
    }
}

impl<P: Pattern> Assertion<str> for Matches<P> {
    fn check(&self, actual: &str) -> Outcome {
        self.outcome(self.pattern.is_match(actual), actual)
    }
}

impl<P: Pattern> Assertion<String> for Matches<P> {
    fn check(&self, actual: &String) -> Outcome {
        self.outcome(self.pattern.is_match(actual), actual)
    }
}

impl<P: Pattern> Assertion<Value> for Matches<P> {
    fn check(&self, actual: &Value) -> Outcome {
        let found = actual
            .as_str()
            .is_some_and(|text| self.pattern.is_match(text));
        self.outcome(found, actual)
    }
}

/// Create an assertion that succeeds when the subject matches `pattern`.
///
/// Only strings can match; any other [`Value`] fails.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::Value;
///
/// let digits = matches(|s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
///     .described("digits");
///
/// assert!(digits.check("2024").is_success());
/// assert!(digits.check(&Value::from(2024)).is_failure());
/// assert_eq!(
///     digits.check("20x4").into_inner().to_string(),
///     r#"Expected "20x4" to match digits"#
/// );
/// ```
pub fn matches<P: Pattern>(pattern: P) -> Matches<P> {
    Matches {
        pattern,
        label: Cow::Borrowed("<pattern>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts_upper(text: &str) -> bool {
        text.chars().next().is_some_and(char::is_uppercase)
    }

    #[test]
    fn test_fn_item_as_pattern() {
        let m = matches(starts_upper);
        assert!(m.check("Hello").is_success());
        assert!(m.check("hello").is_failure());
        assert!(m.check(&String::from("Hi")).is_success());
    }

    #[test]
    fn test_value_subjects() {
        let m = matches(starts_upper);
        assert!(m.check(&Value::from("Yes")).is_success());
        assert!(m.check(&Value::Null).is_failure());
        assert!(m.check(&Value::array(["Yes"])).is_failure());
    }

    #[test]
    fn test_default_label() {
        let d = matches(|s: &str| s.is_empty()).check("x").into_inner();
        assert_eq!(d.to_string(), r#"Expected "x" to match <pattern>"#);
    }
}
