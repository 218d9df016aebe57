use serde::{Deserialize, Serialize};
use viewdb::prelude::RecordKey;

///
/// User
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserInput {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserOutput {
    pub email: String,
    pub id: RecordKey,
    pub password: String,
}
