use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::json;

/// String-keyed mapping with insertion order preserved. Re-inserting an
/// existing key keeps its position and overwrites the value.
pub type Mapping = IndexMap<String, Value>;

/// A fully materialized dynamic value: the output of one decode call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

/// A leaf value, carried over from the originating token unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(DateTime<Utc>),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Render as `serde_json::Value` for display or export. Mapping order
    /// is preserved; dates become RFC 3339 strings, bytes a number array.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(s) => s.to_json(),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Mapping(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (name, val) in map {
                    out.insert(name.clone(), val.to_json());
                }
                serde_json::Value::Object(out)
            }
        }
    }
}

impl Scalar {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(b) => serde_json::Value::Bool(*b),
            Scalar::Int(n) => json!(*n),
            Scalar::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Scalar::Str(s) => json!(s),
            Scalar::Date(d) => json!(d.to_rfc3339()),
            Scalar::Bytes(b) => serde_json::Value::Array(b.iter().map(|x| json!(*x)).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_keeps_insertion_order_with_last_write_wins() {
        let mut map = Mapping::new();
        map.insert("a".to_string(), Value::Scalar(Scalar::Int(1)));
        map.insert("b".to_string(), Value::Scalar(Scalar::Int(2)));
        map.insert("a".to_string(), Value::Scalar(Scalar::Int(3)));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map["a"], Value::Scalar(Scalar::Int(3)));
    }

    #[test]
    fn to_json_renders_nested_structure() {
        let mut inner = Mapping::new();
        inner.insert("k".to_string(), Value::Scalar(Scalar::Bool(true)));
        let v = Value::Sequence(vec![
            Value::Scalar(Scalar::Int(1)),
            Value::Scalar(Scalar::Str("x".to_string())),
            Value::Mapping(inner),
        ]);
        assert_eq!(v.to_json(), json!([1, "x", {"k": true}]));
    }

    #[test]
    fn to_json_handles_non_finite_floats() {
        let v = Value::Scalar(Scalar::Float(f64::NAN));
        assert_eq!(v.to_json(), serde_json::Value::Null);
    }
}
