//! JSON interop: serde_json conversions and serde implementations.
//!
//! JSON has no bytes or datetime shapes, so those variants degrade to
//! text on the way out (base64 and RFC 3339 respectively). On the way in,
//! numbers become `Integer` whenever they are exactly representable as
//! `i64` and `Float` otherwise.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Object, Value};

impl Value {
    /// Decode a JSON document into a `Value`.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(Self::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else {
                    // u64 beyond i64::MAX, or a fractional number.
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Boolean(b) => Self::Bool(b),
            Value::Integer(i) => Self::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map_or_else(|| Self::String(f.to_string()), Self::Number),
            Value::Text(s) => Self::String(s),
            Value::Bytes(b) => Self::String(BASE64.encode(b)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(o) => Self::Object(
                o.into_iter()
                    .map(|(k, val)| (k, Self::from(val)))
                    .collect(),
            ),
            Value::DateTime(dt) => Self::String(dt.to_rfc3339()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_str(&BASE64.encode(b)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.len()))?;
                for (k, v) in o.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Self::DateTime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("any JSON-shaped value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Integer))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::text(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Value, E> {
        Ok(Value::bytes(v.to_vec()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut object = Object::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            object.insert(key, value);
        }
        Ok(Value::Object(object))
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
    fn decodes_integers_exactly() {
        let v = Value::from_json_str("42").unwrap();
        assert_eq!(v, Value::Integer(42));
    }

    #[test]
    fn decodes_fractions_as_float() {
        let v = Value::from_json_str("4.5").unwrap();
        assert_eq!(v, Value::Float(4.5));
    }

    #[test]
    fn huge_u64_degrades_to_float() {
        let v = Value::from_json_str("18446744073709551615").unwrap();
        assert_eq!(v.kind(), crate::ValueKind::Float);
    }

    #[test]
    fn decodes_nested_document() {
        let v = Value::from_json_str(r#"{"a": [1, "two", null]}"#).unwrap();
        let expected = Value::object([(
            "a".to_string(),
            Value::array([Value::integer(1), Value::text("two"), Value::Null]),
        )]);
        assert_eq!(v, expected);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Value::from_json_str("{not json").is_err());
    }

    #[test]
    fn serde_round_trip_preserves_json_shapes() {
        let v = Value::object([
            ("n".to_string(), Value::integer(1)),
            ("s".to_string(), Value::text("x")),
            ("a".to_string(), Value::array([Value::Boolean(true)])),
        ]);
        let text = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn bytes_render_as_base64() {
        let json = serde_json::Value::from(Value::bytes(vec![1, 2, 3]));
        assert_eq!(json, serde_json::Value::String("AQID".to_string()));
    }
}
