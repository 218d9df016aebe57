use crate::views::link::{DateInput, RecordLink};
use serde::{Deserialize, Serialize};
use viewdb::prelude::{Duration, RecordKey};

///
/// Project
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectOutput {
    pub id: RecordKey,
    pub name: String,
}

///
/// Work
///
/// The `in`/`out` fields link a logged stretch of work to its worker and
/// project; the raw identifiers keep those names on the wire.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WorkInput {
    pub activity: String,
    pub date: DateInput,
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub r#in: RecordKey,
    pub out: RecordKey,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WorkOutput {
    pub activity: String,
    pub date: String,
    pub duration: Duration,
    pub id: RecordKey,
    pub r#in: RecordLink<WorkerOutput>,
    pub out: RecordLink<ProjectOutput>,
}

///
/// Worker
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WorkerInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WorkerOutput {
    pub id: RecordKey,
    pub name: String,
}
