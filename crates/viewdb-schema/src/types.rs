use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// Primitive
///
/// Closed set of leaf field kinds. The serialized names are the wire
/// vocabulary of the metadata format, so `Text` appears as `string`.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Any,
    Boolean,
    Bytes,
    Date,
    Decimal,
    Duration,
    Null,
    Number,
    #[serde(rename = "string")]
    Text,
    Uuid,
}

impl Primitive {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Duration => "duration",
            Self::Null => "null",
            Self::Number => "number",
            Self::Text => "string",
            Self::Uuid => "uuid",
        }
    }

    //
    // grouped helpers
    //

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Decimal)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Duration)
    }

    /// Primitives whose values can stand in for a record key.
    #[must_use]
    pub const fn is_key_like(self) -> bool {
        matches!(self, Self::Text | Self::Uuid)
    }

    // both Ord and PartialOrd
    #[must_use]
    pub const fn supports_ord(self) -> bool {
        !matches!(self, Self::Any | Self::Bytes | Self::Null)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ParsePrimitiveError
///

#[derive(Debug, ThisError)]
#[error("unknown primitive '{0}'")]
pub struct ParsePrimitiveError(String);

impl FromStr for Primitive {
    type Err = ParsePrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "boolean" => Ok(Self::Boolean),
            "bytes" => Ok(Self::Bytes),
            "date" => Ok(Self::Date),
            "decimal" => Ok(Self::Decimal),
            "duration" => Ok(Self::Duration),
            "null" => Ok(Self::Null),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::Text),
            "uuid" => Ok(Self::Uuid),
            other => Err(ParsePrimitiveError(other.to_string())),
        }
    }
}
