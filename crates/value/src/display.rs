//! JSON-like `Display` rendering for diagnostics and error messages.

use core::fmt::{Display, Formatter};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::Value;

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "b64\"{}\"", BASE64.encode(b)),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(o) => {
                f.write_str("{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn renders_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::integer(3).to_string(), "3");
        assert_eq!(Value::text("hi").to_string(), "\"hi\"");
    }

    #[test]
    fn renders_collections() {
        let v = Value::array([Value::integer(1), Value::text("x")]);
        assert_eq!(v.to_string(), "[1, \"x\"]");

        let o = Value::object([("k".to_string(), Value::Boolean(true))]);
        assert_eq!(o.to_string(), "{\"k\": true}");
    }
}
