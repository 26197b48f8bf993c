//! Verification reader port (read side / CQRS queries).
//!
//! Status- and owner-filtered listings over committed requests, always
//! ordered by `(submitted_at, id)` descending (newest first). Readers only
//! ever see whole committed records.
//!
//! Listings page either by offset (HTTP `?offset=`) or by keyset: with
//! `after` set, only requests strictly older than the cursor are returned
//! and the offset applies within that remainder.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, VerificationRequestId};
use crate::domain::verification::{
    PersonalInfo, PitchData, VerificationRequest, VerificationStatus,
};

use super::RepositoryError;

/// Reader port for verification request queries.
#[async_trait]
pub trait VerificationReader: Send + Sync {
    /// One page of requests in `status`, newest first.
    async fn list_by_status(
        &self,
        status: VerificationStatus,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError>;

    /// One page of requests owned by `owner`, optionally filtered by status.
    async fn list_by_owner(
        &self,
        owner: &UserId,
        status: Option<VerificationStatus>,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError>;

    /// Submitted and approved totals for one owner.
    async fn count_by_owner(&self, owner: &UserId) -> Result<OwnerCounts, RepositoryError>;
}

/// Options for listing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of requests to return.
    pub limit: Option<u32>,

    /// Number of requests to skip.
    pub offset: Option<u32>,

    /// Only return requests ordered after this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<PageCursor>,
}

/// Keyset position in the newest-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub submitted_at: Timestamp,
    pub id: VerificationRequestId,
}

impl PageCursor {
    /// Cursor positioned at `request`.
    pub fn of(request: &VerificationRequest) -> Self {
        Self {
            submitted_at: *request.submitted_at(),
            id: *request.id(),
        }
    }

    /// True if `request` comes strictly after the cursor, newest first.
    pub fn precedes(&self, request: &VerificationRequest) -> bool {
        (*request.submitted_at(), *request.id().as_uuid()) < (self.submitted_at, *self.id.as_uuid())
    }
}

impl ListOptions {
    /// Default page size when no limit is given.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Upper bound on any single page.
    pub const MAX_LIMIT: u32 = 100;

    /// Create options for a paginated query.
    pub fn paginated(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            after: None,
        }
    }

    /// Create options with just a limit (no offset).
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
            after: None,
        }
    }

    /// Returns the effective limit, between 1 and `MAX_LIMIT`.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Returns the effective offset (defaults to 0).
    pub fn effective_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// Options for the page following `last`, the final item of this page.
    ///
    /// Keyed on the item rather than an offset so that requests leaving the
    /// listing between pages do not shift the window.
    pub fn after_item(&self, last: &VerificationRequest) -> Self {
        Self {
            limit: Some(self.effective_limit()),
            offset: None,
            after: Some(PageCursor::of(last)),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,

    /// Total number of matching items.
    pub total: u64,

    /// Whether there are more items after this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }

    /// Builds a page from a total count and the requested window.
    pub fn new(items: Vec<T>, total: u64, options: &ListOptions) -> Self {
        let seen = options.effective_offset() as u64 + items.len() as u64;
        Self {
            has_more: seen < total,
            items,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            has_more: self.has_more,
        }
    }
}

/// Per-owner totals for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCounts {
    /// Requests in any status.
    pub submitted: u64,

    /// Requests in `approved`.
    pub approved: u64,
}

/// Feed entry for an approved pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSummary {
    pub id: VerificationRequestId,
    pub personal_info: PersonalInfo,
    pub pitch_data: PitchData,
    pub status: VerificationStatus,
    pub submitted_at: Timestamp,
    pub reviewed_at: Option<Timestamp>,

    /// Externally computed score, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<&VerificationRequest> for PitchSummary {
    fn from(request: &VerificationRequest) -> Self {
        Self {
            id: *request.id(),
            personal_info: request.personal_info().clone(),
            pitch_data: request.pitch_data().clone(),
            status: request.status(),
            submitted_at: *request.submitted_at(),
            reviewed_at: request.reviewed_at().copied(),
            score: request.score(),
        }
    }
}
