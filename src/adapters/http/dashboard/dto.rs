//! HTTP DTOs for dashboard and feed endpoints.
//!
//! Read-only, so only response types live here; feed entries reuse
//! `PitchSummaryResponse`.

use serde::{Deserialize, Serialize};

use crate::application::DashboardCounts;

/// Body of `GET /api/dashboard`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardResponse {
    pub submitted: u64,
    pub approved: u64,
    pub unread_messages: u64,
}

impl From<DashboardCounts> for DashboardResponse {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            submitted: counts.submitted,
            approved: counts.approved,
            unread_messages: counts.unread_messages,
        }
    }
}
