//! Runtime type and class assertions

use super::{assert, Assertion, Outcome};
use crate::{Class, Divergence, TypeTag, Value};

/// Assertion that the subject's `typeof` tag is a given [`TypeTag`].
#[derive(Clone, Copy, Debug)]
pub struct IsOfType {
    tag: TypeTag,
}

impl Assertion<Value> for IsOfType {
    fn check(&self, actual: &Value) -> Outcome {
        assert(
            actual.type_of() == self.tag,
            Divergence::new(actual, "to be of type").with_expected(self.tag.as_str()),
        )
    }
}

/// Create an assertion that succeeds when the subject has type `tag`.
///
/// Type names parse into tags, so names coming from configuration or user
/// input work too.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::{TypeTag, Value};
///
/// assert!(is_of_type(TypeTag::Number).check(&Value::from(1)).is_success());
/// assert!(is_of_type(TypeTag::Object).check(&Value::array([1])).is_success());
///
/// let tag: TypeTag = "string".parse().unwrap();
/// assert!(is_of_type(tag).check(&Value::from(1)).is_failure());
/// ```
pub fn is_of_type(tag: TypeTag) -> IsOfType {
    IsOfType { tag }
}

/// Assertion that the subject's internal class is a given [`Class`].
#[derive(Clone, Copy, Debug)]
pub struct IsOfClass {
    class: Class,
}

impl Assertion<Value> for IsOfClass {
    fn check(&self, actual: &Value) -> Outcome {
        assert(
            actual.class_of() == self.class,
            Divergence::new(actual, "to have class").with_expected(self.class.as_str()),
        )
    }
}

/// Create an assertion that succeeds when the subject has class `class`.
///
/// # Example
///
/// ```rust
/// use alright::assertion::*;
/// use alright::{Class, Value};
///
/// assert!(is_of_class(Class::Array).check(&Value::array([1])).is_success());
/// assert!(is_of_class(Class::Object).check(&Value::array([1])).is_failure());
/// ```
pub fn is_of_class(class: Class) -> IsOfClass {
    IsOfClass { class }
}
