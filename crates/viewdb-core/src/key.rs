use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

///
/// RecordKey
///
/// Opaque record identifier. Keys carry no table information; resolution
/// always happens against an explicit table (or candidate set).
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for RecordKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<Uuid> for RecordKey {
    fn from(key: Uuid) -> Self {
        Self(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_transparent_strings() {
        let key = RecordKey::from("p1");
        assert_eq!(key.as_str(), "p1");
        assert_eq!(key.to_string(), "p1");

        let json = serde_json::to_string(&key).expect("key should serialize");
        assert_eq!(json, "\"p1\"");
    }

    #[test]
    fn uuid_keys_use_the_hyphenated_form() {
        let uuid = Uuid::nil();
        let key = RecordKey::from(uuid);
        assert_eq!(key.as_str(), "00000000-0000-0000-0000-000000000000");
    }
}
