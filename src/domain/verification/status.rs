//! Review status state machines.
//!
//! `VerificationStatus` governs the whole request; `DocumentStatus` tracks
//! each document slot independently of the parent.

use crate::domain::foundation::{StateMachine, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level review status of a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Submitted and waiting in the admin queue.
    #[default]
    Pending,

    /// Accepted by an admin. Listed in the public feed.
    Approved,

    /// Refused by an admin. Hidden permanently.
    Rejected,

    /// Admin asked the submitter for more information.
    NeedsClarification,
}

impl VerificationStatus {
    /// All statuses, in declaration order.
    pub const ALL: [VerificationStatus; 4] = [
        VerificationStatus::Pending,
        VerificationStatus::Approved,
        VerificationStatus::Rejected,
        VerificationStatus::NeedsClarification,
    ];

    /// Returns the persisted / wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
            VerificationStatus::NeedsClarification => "needs_clarification",
        }
    }

    /// Returns true while the request still accepts document changes.
    pub fn accepts_documents(&self) -> bool {
        !self.is_terminal()
    }
}

impl StateMachine for VerificationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use VerificationStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Approved)
                | (Pending, Rejected)
                | (Pending, NeedsClarification)
            // From NEEDS_CLARIFICATION
                | (NeedsClarification, Approved)
                | (NeedsClarification, Rejected)
                | (NeedsClarification, Pending) // Submitter resupplied information
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use VerificationStatus::*;
        match self {
            Pending => vec![Approved, Rejected, NeedsClarification],
            NeedsClarification => vec![Approved, Rejected, Pending],
            Approved => vec![],
            Rejected => vec![],
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "approved" => Ok(VerificationStatus::Approved),
            "rejected" => Ok(VerificationStatus::Rejected),
            "needs_clarification" => Ok(VerificationStatus::NeedsClarification),
            other => Err(ValidationError::invalid_format(
                "verification_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// Verification status of a single document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    PendingVerification,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::PendingVerification => "pending_verification",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_verification" => Ok(DocumentStatus::PendingVerification),
            "approved" => Ok(DocumentStatus::Approved),
            "rejected" => Ok(DocumentStatus::Rejected),
            other => Err(ValidationError::invalid_format(
                "document_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
