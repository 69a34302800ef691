//! Serde support for [`Value`]
//!
//! Values serialize to their JSON shape. `undefined` has no JSON form and is
//! written as `null`, so it comes back as [`Value::Null`]. Whole numbers are
//! written as integers. `NaN` and the infinities are rejected rather than
//! silently turned into `null`.
//!
//! ```rust
//! use alright::Value;
//!
//! let v: Value = serde_json::from_str(r#"{"tags": ["a", "b"], "n": 1}"#).unwrap();
//! assert!(v.has_own("tags"));
//! assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"n":1,"tags":["a","b"]}"#);
//! ```

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Map, Value};

/// Largest magnitude below which every integer has an exact `f64` form.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => Err(S::Error::custom(format!(
                "non-finite number {:?} has no JSON form",
                self
            ))),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_u64<E>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_f64<E>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::from(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::new();
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::from(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let v = Value::object([
            ("list", Value::array([Value::from(true), Value::Null])),
            ("name", Value::from("ada")),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"list":[true,null],"name":"ada"}"#);
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let json = serde_json::to_string(&Value::Undefined).unwrap();
        assert_eq!(json, "null");
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Null);
    }

    #[test]
    fn test_deserialize_numbers() {
        let v: Value = serde_json::from_str("[1, -2, 2.5]").unwrap();
        assert_eq!(v, Value::array([1.0, -2.0, 2.5]));
    }

    #[test]
    fn test_whole_numbers_keep_integer_shape() {
        let json = r#"{"big":9007199254740992,"n":1,"neg":-3,"x":2.5}"#;
        let v: Value = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), json);
        assert_eq!(serde_json::to_string(&Value::from(-0.0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Value::from(1e300)).unwrap(), "1e300");
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = serde_json::to_string(&Value::array([n])).unwrap_err();
            assert!(err.to_string().contains("has no JSON form"), "{}", err);
        }
        let err = serde_json::to_string(&Value::from(f64::NAN)).unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_deserialize_preserves_structure() {
        let json = r#"{"a": {"b": [1, "two", false]}}"#;
        let v: Value = serde_json::from_str(json).unwrap();
        let restored: Value = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(v, restored);
        assert!(!v.strict_eq(&restored));
    }
}
