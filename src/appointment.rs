//! Appointment records.

use serde::{Deserialize, Serialize};

/// Progress of an [`Appointment`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A scheduled service, owned by exactly one user.
///
/// `date` and `time` are opaque strings. No calendar validation nor
/// overlap checking is performed on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub client: String,
    pub status: Status,
}

/// Fields required to create an [`Appointment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub time: String,
    pub service: String,
    pub client: String,
    pub status: Status,
}

/// Partial update of an [`Appointment`]. `None` fields keep their
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
    pub client: Option<String>,
    pub status: Option<Status>,
}
