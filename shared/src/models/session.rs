use serde::{Deserialize, Serialize};
use crate::models::status::Status;

/// A course or programme session the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub start_date: String,
    pub end_date: String,
    pub status: Status,
}
