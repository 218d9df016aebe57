use serde::{Deserialize, Serialize};
use viewdb::prelude::{Date, RecordKey};

///
/// RecordLink
///
/// Output-side reference field: the consumer must accept either the bare
/// key or the fully expanded referenced record. Untagged, so the JSON
/// shape alone decides.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordLink<T> {
    Key(RecordKey),
    Record(Box<T>),
}

impl<T> RecordLink<T> {
    #[must_use]
    pub const fn key(&self) -> Option<&RecordKey> {
        match self {
            Self::Key(key) => Some(key),
            Self::Record(_) => None,
        }
    }

    #[must_use]
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Key(_) => None,
            Self::Record(record) => Some(record),
        }
    }
}

///
/// DateInput
///
/// Input-side temporal field: a native date value or an ISO string.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(Date),
    Text(String),
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}
