use serde::{Deserialize, Serialize};
use crate::models::status::Status;

/// A scheduled appointment. Read-only on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Free-form time of day as entered, e.g. "10:00 AM".
    pub time: String,
    pub location: String,
    pub status: Status,
}
