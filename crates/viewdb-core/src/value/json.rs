//! Boundary conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON is the interchange surface: payloads arrive as JSON, normalized and
//! rendered records leave as JSON. Typed values that JSON cannot carry
//! natively map onto their canonical wire forms (dates and decimals as
//! strings, durations as millisecond numbers, bytes as number arrays).

use crate::value::{Value, ValueMap};

impl Value {
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    // JSON numbers are finite, so the fallback cannot fail
                    n.as_f64()
                        .and_then(crate::types::Float64::try_new)
                        .map_or(Self::Null, Self::Float64)
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Bytes(bytes) => serde_json::Value::Array(
                bytes
                    .iter()
                    .map(|b| serde_json::Value::Number((*b).into()))
                    .collect(),
            ),
            Self::Date(d) => serde_json::Value::String(d.to_string()),
            Self::Decimal(d) => serde_json::Value::String(d.to_string()),
            Self::Duration(d) => serde_json::Value::Number(d.get().into()),
            Self::Float64(f) => serde_json::Number::from_f64(f.get())
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Int(i) => serde_json::Value::Number((*i).into()),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Null => serde_json::Value::Null,
            Self::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Uint(u) => serde_json::Value::Number((*u).into()),
            Self::Uuid(u) => serde_json::Value::String(u.to_string()),
        }
    }
}
