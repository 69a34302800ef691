//! Dynamic values with explicit runtime type tags
//!
//! Assertions such as [`is_of_type`](crate::assertion::is_of_type) and
//! [`strict_equals`](crate::assertion::strict_equals) need to inspect a value's
//! kind and identity at runtime. Rust erases that information, so this module
//! provides [`Value`], a small dynamic value that carries its tag explicitly.
//!
//! # Equality
//!
//! `Value` has two notions of equality:
//!
//! - **Deep** (`==`): same variant, recursively equal contents. `NaN` is equal
//!   to `NaN`, so every value equals itself.
//! - **Strict** ([`Value::strict_eq`]): primitives by value (`NaN` is *not*
//!   equal to itself), arrays and objects by identity.
//!
//! Arrays and objects are shared: cloning a `Value` keeps the same identity,
//! building a new one (even with equal contents) creates a new identity.
//!
//! ```
//! use alright::Value;
//!
//! let a = Value::array([1, 2]);
//! let b = Value::array([1, 2]);
//!
//! assert_eq!(a, b);
//! assert!(!a.strict_eq(&b));
//! assert!(a.strict_eq(&a.clone()));
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ParseTagError;

/// String-keyed map held by [`Value::Object`].
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value
    #[default]
    Undefined,
    /// The null value
    Null,
    /// A boolean
    Bool(bool),
    /// A double precision number
    Number(f64),
    /// A string
    String(String),
    /// A shared list of values
    Array(Arc<Vec<Value>>),
    /// A shared map of own keys to values
    Object(Arc<Map>),
}

impl Value {
    /// Build a fresh array.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a fresh object.
    ///
    /// ```
    /// use alright::Value;
    ///
    /// let user = Value::object([("name", Value::from("ada")), ("age", Value::from(36))]);
    /// assert!(user.has_own("name"));
    /// ```
    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Object(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// An empty object (`{}`).
    pub fn empty_object() -> Self {
        Value::Object(Arc::new(Map::new()))
    }

    /// The runtime type tag, as `typeof` would report it.
    ///
    /// `null`, arrays and objects all report [`TypeTag::Object`].
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null | Value::Array(_) | Value::Object(_) => TypeTag::Object,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
        }
    }

    /// The internal class of the value.
    ///
    /// Finer grained than [`type_of`](Value::type_of): tells `null`, arrays
    /// and objects apart.
    pub fn class_of(&self) -> Class {
        match self {
            Value::Undefined => Class::Undefined,
            Value::Null => Class::Null,
            Value::Bool(_) => Class::Boolean,
            Value::Number(_) => Class::Number,
            Value::String(_) => Class::String,
            Value::Array(_) => Class::Array,
            Value::Object(_) => Class::Object,
        }
    }

    /// Identity equality.
    ///
    /// Primitives compare by value without coercion; `NaN` is never strictly
    /// equal to anything. Arrays and objects are strictly equal only to
    /// themselves (or clones sharing the same allocation).
    ///
    /// ```
    /// use alright::Value;
    ///
    /// assert!(Value::from(1).strict_eq(&Value::from(1.0)));
    /// assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
    /// assert!(!Value::from("1").strict_eq(&Value::from(1)));
    /// ```
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => self.same_primitive(other),
        }
    }

    fn same_primitive(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    /// Whether the value counts as true in a boolean context.
    ///
    /// `false`, `0`, `-0`, `NaN`, `""`, `null` and `undefined` are falsy.
    /// Everything else is truthy, including empty arrays and objects.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Whether `key` is an own key of this value.
    ///
    /// Objects own their map keys. Arrays own their in-bounds indices
    /// (written canonically, without leading zeros) and `length`. Primitives
    /// own nothing.
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            Value::Array(items) => key == "length" || array_index(key, items.len()).is_some(),
            _ => false,
        }
    }

    /// Look up an own property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => array_index(key, items.len()).map(|i| &items[i]),
            _ => None,
        }
    }

    /// The own keys of the value, in iteration order.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.keys().cloned().collect(),
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the map, if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

fn array_index(key: &str, len: usize) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    // "01" and "+1" parse but are not array keys
    (index < len && index.to_string() == key).then_some(index)
}

fn numbers_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
            (Value::Array(a), Value::Array(b)) => {
                Arc::ptr_eq(a, b) || (a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y))
            }
            (Value::Object(a), Value::Object(b)) => {
                Arc::ptr_eq(a, b)
                    || (a.len() == b.len()
                        && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v == w)))
            }
            _ => self.same_primitive(other),
        }
    }
}

// Deep equality treats NaN as equal to itself, so it is reflexive.
impl Eq for Value {}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Object(map) => f.debug_map().entries(map.iter()).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(Arc::new(map))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// The result of `typeof` on a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `"undefined"`
    Undefined,
    /// `"object"`: null, arrays and objects
    Object,
    /// `"boolean"`
    Boolean,
    /// `"number"`
    Number,
    /// `"string"`
    String,
}

impl TypeTag {
    /// The name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(TypeTag::Undefined),
            "object" => Ok(TypeTag::Object),
            "boolean" => Ok(TypeTag::Boolean),
            "number" => Ok(TypeTag::Number),
            "string" => Ok(TypeTag::String),
            other => Err(ParseTagError::new("type", other)),
        }
    }
}

/// The internal class (brand) of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// `Undefined`
    Undefined,
    /// `Null`
    Null,
    /// `Boolean`
    Boolean,
    /// `Number`
    Number,
    /// `String`
    String,
    /// `Array`
    Array,
    /// `Object`
    Object,
}

impl Class {
    /// The name of the class.
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Undefined => "Undefined",
            Class::Null => "Null",
            Class::Boolean => "Boolean",
            Class::Number => "Number",
            Class::String => "String",
            Class::Array => "Array",
            Class::Object => "Object",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Class {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undefined" => Ok(Class::Undefined),
            "Null" => Ok(Class::Null),
            "Boolean" => Ok(Class::Boolean),
            "Number" => Ok(Class::Number),
            "String" => Ok(Class::String),
            "Array" => Ok(Class::Array),
            "Object" => Ok(Class::Object),
            other => Err(ParseTagError::new("class", other)),
        }
    }
}

/// Types with a notion of truthiness.
///
/// [`Value`] follows the usual dynamic-language rules. For plain Rust types:
/// zero, `NaN`, `false`, empty strings and `None` are falsy.
pub trait Truthiness {
    /// Whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthiness for Value {
    fn is_truthy(&self) -> bool {
        Value::is_truthy(self)
    }
}

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthiness for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::is_truthy)
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthiness_int {
    ($($t:ty),+) => {
        $(
            impl Truthiness for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthiness_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthiness for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Undefined.type_of(), TypeTag::Undefined);
        assert_eq!(Value::Null.type_of(), TypeTag::Object);
        assert_eq!(Value::from(true).type_of(), TypeTag::Boolean);
        assert_eq!(Value::from(1).type_of(), TypeTag::Number);
        assert_eq!(Value::from("x").type_of(), TypeTag::String);
        assert_eq!(Value::array([1]).type_of(), TypeTag::Object);
        assert_eq!(Value::empty_object().type_of(), TypeTag::Object);
    }

    #[test]
    fn test_class_of() {
        assert_eq!(Value::Undefined.class_of(), Class::Undefined);
        assert_eq!(Value::Null.class_of(), Class::Null);
        assert_eq!(Value::array([1]).class_of(), Class::Array);
        assert_eq!(Value::empty_object().class_of(), Class::Object);
    }

    #[test]
    fn test_tag_names_roundtrip() {
        for tag in [
            TypeTag::Undefined,
            TypeTag::Object,
            TypeTag::Boolean,
            TypeTag::Number,
            TypeTag::String,
        ] {
            assert_eq!(tag.to_string().parse::<TypeTag>(), Ok(tag));
        }
        assert_eq!("Array".parse::<Class>(), Ok(Class::Array));
        assert!("array".parse::<Class>().is_err());
        assert!("function".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_deep_equality() {
        assert_eq!(Value::array([1, 2]), Value::array([1, 2]));
        assert_ne!(Value::array([1, 2]), Value::array([2, 1]));
        assert_eq!(
            Value::object([("a", 1), ("b", 2)]),
            Value::object([("b", 2), ("a", 1)])
        );
        assert_ne!(Value::object([("a", 1)]), Value::object([("a", 2)]));
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
    }

    #[test]
    fn test_strict_equality() {
        let a = Value::array([1, 2]);
        assert!(a.strict_eq(&a));
        assert!(a.strict_eq(&a.clone()));
        assert!(!a.strict_eq(&Value::array([1, 2])));
        assert!(Value::from("x").strict_eq(&Value::from("x")));
        assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
        assert!(!Value::Null.strict_eq(&Value::Undefined));
    }

    #[test]
    fn test_truthiness() {
        for falsy in [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(""),
        ] {
            assert!(!falsy.is_truthy(), "{:?} should be falsy", falsy);
        }
        for truthy in [
            Value::from(true),
            Value::from(-1),
            Value::from("0"),
            Value::array(Vec::<Value>::new()),
            Value::empty_object(),
        ] {
            assert!(truthy.is_truthy(), "{:?} should be truthy", truthy);
        }
    }

    #[test]
    fn test_rust_truthiness() {
        assert!(1u8.is_truthy());
        assert!(!0i64.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!(Some("x").is_truthy());
        assert!(!None::<bool>.is_truthy());
        assert!(!Some(false).is_truthy());
    }

    #[test]
    fn test_has_own() {
        let obj = Value::object([("a", 1)]);
        assert!(obj.has_own("a"));
        assert!(!obj.has_own("b"));

        let arr = Value::array(["x", "y"]);
        assert!(arr.has_own("0"));
        assert!(arr.has_own("1"));
        assert!(arr.has_own("length"));
        assert!(!arr.has_own("2"));
        assert!(!arr.has_own("01"));

        assert!(!Value::from("abc").has_own("length"));
        assert!(!Value::Null.has_own("a"));
    }

    #[test]
    fn test_get_and_keys() {
        let arr = Value::array(["x", "y"]);
        assert_eq!(arr.get("1"), Some(&Value::from("y")));
        assert_eq!(arr.keys(), vec!["0", "1"]);

        let obj = Value::object([("b", 2), ("a", 1)]);
        assert_eq!(obj.keys(), vec!["a", "b"]);
        assert_eq!(obj.get("a").and_then(Value::as_f64), Some(1.0));
    }

    #[test]
    fn test_debug_rendering() {
        let v = Value::object([
            ("list", Value::array([Value::from(1), Value::Null])),
            ("name", Value::from("ada")),
        ]);
        assert_eq!(format!("{:?}", v), r#"{"list": [1, null], "name": "ada"}"#);
        assert_eq!(format!("{:?}", Value::from(1.5)), "1.5");
        assert_eq!(format!("{:?}", Value::from(f64::INFINITY)), "Infinity");
        assert_eq!(format!("{}", Value::from("plain")), "plain");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::from(3));
    }
}
