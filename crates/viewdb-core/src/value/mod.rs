mod json;

use crate::{
    key::RecordKey,
    types::{Date, Decimal, Duration, Float64},
};
use uuid::Uuid;

///
/// Value
///
/// Runtime representation of record data. Every payload the validator or
/// the renderer touches is one of these; the schema side never owns values.
///
/// Null → the field explicitly holds no value (distinct from absence,
///        which is a missing key in the enclosing [`ValueMap`]).
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Bytes(Vec<u8>),
    Date(Date),
    Decimal(Decimal),
    Duration(Duration),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values; order is preserved through normalization.
    List(Vec<Self>),
    Null,
    /// Keyed aggregate; insertion order is preserved for display purposes.
    Object(ValueMap),
    Text(String),
    Uint(u64),
    Uuid(Uuid),
}

impl Value {
    /// Short kind label used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Decimal(_) => "decimal",
            Self::Duration(_) => "duration",
            Self::Float64(_) | Self::Int(_) | Self::Uint(_) => "number",
            Self::List(_) => "array",
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::Text(_) => "string",
            Self::Uuid(_) => "uuid",
        }
    }

    /// A value that can stand in for a record key: non-empty text or a uuid.
    #[must_use]
    pub fn is_key_shaped(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Uuid(_) => true,
            _ => false,
        }
    }

    #[must_use]
    pub fn as_key(&self) -> Option<RecordKey> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(RecordKey::from(s.as_str())),
            Self::Uuid(u) => Some(RecordKey::from(*u)),
            _ => None,
        }
    }

    /// Numeric view used by enum/literal comparison.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(f.get()),
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Self::Object(v)
    }
}

impl From<RecordKey> for Value {
    fn from(v: RecordKey) -> Self {
        Self::Text(v.into_string())
    }
}

///
/// ValueMap
///
/// Insertion-ordered string-keyed aggregate, mirroring the field order of
/// the schema side. Lookup is linear; records are small.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        self.entries.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}
