//! Tree Value — the heterogeneous document model
//!
//! One decoded provider response is a `Value`: null, string, ordered list,
//! or ordered string-keyed map. Providers disagree wildly on where data
//! lives in this tree; the resolution engine in `finder` walks it generically.
//!
//! Maps are stored as entry vectors so key insertion order survives decoding.
//! The first-match traversal in `finder` depends on that order, so `Value`
//! implements `Deserialize` by hand rather than going through an intermediate
//! map type that might reorder keys.
//!
//! JSON scalars with no counterpart in this model (numbers, booleans) are
//! projected onto `Str` with their literal rendering. Record fields are
//! stored unparsed, so nothing downstream ever inspects a scalar's type.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A node of one decoded provider document
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Str(String),
    List(Vec<Value>),
    /// Entries in document insertion order; first occurrence wins on lookup
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Direct map lookup — first entry with `key`, no recursion.
    /// Returns `None` for non-map nodes.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for null, the empty string, the empty list, and the empty map.
    /// Candidate items with nothing in them are skipped during normalization.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
        }
    }
}

// ── Display ───────────────────────────────────────────────

/// Minimal text rendering: bare strings, `[a, b]` lists, `{k: v}` maps,
/// `~` for null. Used by the canonical record serializer and the CLI.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "~"),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// ── Serde ─────────────────────────────────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::Str(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::Str(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
                // MapAccess yields entries in document order
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(Value::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// ── Conversions ───────────────────────────────────────────

/// Bridge for callers that already hold a `serde_json::Value`.
/// Entry order follows the source map's iteration order (the crate is built
/// with `preserve_order`, so that is document order).
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Str(b.to_string()),
            serde_json::Value::Number(n) => Value::Str(n.to_string()),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    // ── Decoding ───────────────────────────────────────

    #[test]
    fn test_decode_preserves_key_order() {
        let value = decode(r#"{"zulu": "1", "alpha": "2", "mike": "3"}"#);
        match value {
            Value::Map(entries) => {
                let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_scalars_project_onto_str() {
        let value = decode(r#"{"id": 292, "ratio": 1.5, "active": true, "gone": null}"#);
        assert_eq!(value.get("id"), Some(&Value::Str("292".to_string())));
        assert_eq!(value.get("ratio"), Some(&Value::Str("1.5".to_string())));
        assert_eq!(value.get("active"), Some(&Value::Str("true".to_string())));
        assert_eq!(value.get("gone"), Some(&Value::Null));
    }

    #[test]
    fn test_decode_nested_structure() {
        let value = decode(r#"{"outer": {"inner": ["a", "b"]}}"#);
        let inner = value.get("outer").and_then(|o| o.get("inner"));
        assert_eq!(
            inner,
            Some(&Value::List(vec![
                Value::Str("a".to_string()),
                Value::Str("b".to_string()),
            ]))
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let original = decode(r#"{"name": "ns1.example.com", "tags": ["a", "b"], "extra": null}"#);
        let text = serde_json::to_string(&original).unwrap();
        let restored: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_serde_json_value() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"registrar": "Example Inc.", "iana_id": 42}"#).unwrap();
        let value = Value::from(json);
        assert_eq!(
            value.get("registrar"),
            Some(&Value::Str("Example Inc.".to_string()))
        );
        assert_eq!(value.get("iana_id"), Some(&Value::Str("42".to_string())));
    }

    // ── Lookup & shape helpers ─────────────────────────

    #[test]
    fn test_get_returns_first_occurrence() {
        let value = Value::Map(vec![
            ("host".to_string(), Value::Str("first".to_string())),
            ("host".to_string(), Value::Str("second".to_string())),
        ]);
        assert_eq!(value.get("host"), Some(&Value::Str("first".to_string())));
    }

    #[test]
    fn test_get_on_non_map_is_absent() {
        assert_eq!(Value::Str("leaf".to_string()).get("key"), None);
        assert_eq!(Value::List(vec![]).get("key"), None);
        assert_eq!(Value::Null.get("key"), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::Str(String::new()).is_empty());
        assert!(Value::List(vec![]).is_empty());
        assert!(Value::Map(vec![]).is_empty());
        assert!(!Value::Str("x".to_string()).is_empty());
        assert!(!Value::List(vec![Value::Null]).is_empty());
    }

    // ── Display ────────────────────────────────────────

    #[test]
    fn test_display_rendering() {
        let value = decode(r#"{"hostNames": ["NS1.X", "NS2.X"], "note": null}"#);
        assert_eq!(value.to_string(), "{hostNames: [NS1.X, NS2.X], note: ~}");
    }

    #[test]
    fn test_display_is_deterministic() {
        let value = decode(r#"{"b": "2", "a": "1"}"#);
        let first = value.to_string();
        for _ in 0..100 {
            assert_eq!(value.to_string(), first);
        }
    }
}
