//! Review engine: admin transitions on a verification request.
//!
//! Guards run against the current in-memory state before any field is
//! written. A failed guard leaves the request untouched; a successful one
//! assigns status, reason and review stamp together.

use crate::domain::foundation::{AdminId, StateMachine, Timestamp, ValidationError};

use super::{Review, VerificationError, VerificationRequest, VerificationStatus};

/// An admin's decision on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Accept the pitch. Requires every required document slot approved.
    Approve,

    /// Refuse the pitch with a non-blank reason.
    Reject { reason: String },

    /// Ask the submitter for more information.
    RequestClarification,
}

impl ReviewDecision {
    pub fn reject(reason: impl Into<String>) -> Self {
        ReviewDecision::Reject {
            reason: reason.into(),
        }
    }

    /// Name used in logs and transition errors.
    pub fn action(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject { .. } => "reject",
            ReviewDecision::RequestClarification => "request clarification for",
        }
    }

    pub fn target_status(&self) -> VerificationStatus {
        match self {
            ReviewDecision::Approve => VerificationStatus::Approved,
            ReviewDecision::Reject { .. } => VerificationStatus::Rejected,
            ReviewDecision::RequestClarification => VerificationStatus::NeedsClarification,
        }
    }
}

/// Result of a committed review transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub from: VerificationStatus,
    pub to: VerificationStatus,
    pub review: Review,
}

impl ReviewOutcome {
    /// Approvals and rejections are announced to the submitter.
    pub fn should_notify(&self) -> bool {
        matches!(
            self.to,
            VerificationStatus::Approved | VerificationStatus::Rejected
        )
    }
}

impl VerificationRequest {
    /// Applies an admin decision.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the current status does not allow the decision
    /// - `IncompleteDocuments` when approving with unapproved required slots
    /// - `Validation` when rejecting with a blank reason
    pub fn apply_review(
        &mut self,
        decision: ReviewDecision,
        admin: AdminId,
        at: Timestamp,
    ) -> Result<ReviewOutcome, VerificationError> {
        let from = self.status;
        let to = decision.target_status();

        if !from.can_transition_to(&to) {
            return Err(VerificationError::invalid_transition(from, decision.action()));
        }

        let rejection_reason = match decision {
            ReviewDecision::Approve => {
                let pending = self.documents.unapproved_required();
                if !pending.is_empty() {
                    return Err(VerificationError::IncompleteDocuments { pending });
                }
                None
            }
            ReviewDecision::Reject { reason } => {
                let reason = reason.trim();
                if reason.is_empty() {
                    return Err(ValidationError::empty_field("rejection_reason").into());
                }
                Some(reason.to_string())
            }
            ReviewDecision::RequestClarification => None,
        };

        let review = Review {
            reviewed_at: at,
            reviewed_by: admin,
        };

        self.status = to;
        self.rejection_reason = rejection_reason;
        self.review = Some(review.clone());

        Ok(ReviewOutcome { from, to, review })
    }
}
