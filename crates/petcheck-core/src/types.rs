//! Closed enumeration of JSON value categories
//!
//! The schema database is hand-authored against these exact tags, and the
//! same tags name observed runtime types in mismatch messages. Integer vs.
//! float is decided at decode time: a JSON number that `serde_json` can hold
//! as `i64`/`u64` is `int`, anything else is `float`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime type tag of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// JSON string
    Str,
    /// JSON number representable as i64/u64
    Int,
    /// JSON number with a fractional or out-of-range value
    Float,
    /// JSON boolean
    Bool,
    /// JSON null
    Null,
    /// JSON object
    Object,
    /// JSON array
    Array,
}

impl JsonType {
    /// Classify a decoded value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::Str,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Self::Int
                } else {
                    Self::Float
                }
            }
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
        }
    }

    /// The canonical tag used in schema files and mismatch messages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Parse a tag back into a type. Schema files containing anything else
    /// fail deserialization.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "null" => Some(Self::Null),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_scalars() {
        assert_eq!(JsonType::of(&json!("five")), JsonType::Str);
        assert_eq!(JsonType::of(&json!(5)), JsonType::Int);
        assert_eq!(JsonType::of(&json!(-5)), JsonType::Int);
        assert_eq!(JsonType::of(&json!(true)), JsonType::Bool);
        assert_eq!(JsonType::of(&Value::Null), JsonType::Null);
    }

    #[test]
    fn classify_numbers_int_vs_float() {
        assert_eq!(JsonType::of(&json!(5)), JsonType::Int);
        assert_eq!(JsonType::of(&json!(5.0)), JsonType::Float);
        assert_eq!(JsonType::of(&json!(0.25)), JsonType::Float);
        // u64 beyond i64 range is still an integer
        assert_eq!(JsonType::of(&json!(u64::MAX)), JsonType::Int);
    }

    #[test]
    fn classify_containers() {
        assert_eq!(JsonType::of(&json!({"a": 1})), JsonType::Object);
        assert_eq!(JsonType::of(&json!([1, 2])), JsonType::Array);
    }

    #[test]
    fn tag_roundtrip() {
        for t in [
            JsonType::Str,
            JsonType::Int,
            JsonType::Float,
            JsonType::Bool,
            JsonType::Null,
            JsonType::Object,
            JsonType::Array,
        ] {
            assert_eq!(JsonType::from_tag(t.tag()), Some(t));
        }
        assert_eq!(JsonType::from_tag("NoneType"), None);
        assert_eq!(JsonType::from_tag("dict"), None);
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&JsonType::Str).unwrap(), "\"str\"");
        let t: JsonType = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(t, JsonType::Int);
        assert!(serde_json::from_str::<JsonType>("\"list\"").is_err());
    }
}
