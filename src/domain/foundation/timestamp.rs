//! UTC instants used for submission and review stamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a pitch was submitted or reviewed.
///
/// Ordering is chronological; listings sort on it newest first. Serializes
/// as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps a stored `timestamptz` value.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}
