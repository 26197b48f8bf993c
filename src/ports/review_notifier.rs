//! Review notification port.
//!
//! Submitters are told when their pitch is approved or rejected. Delivery
//! is fire-and-forget: a failed notification never undoes a committed
//! transition.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{AdminId, Timestamp, UserId, VerificationRequestId};
use crate::domain::verification::{ReviewOutcome, VerificationRequest, VerificationStatus};

/// Message handed to the notifier after a committed review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewNotification {
    pub request_id: VerificationRequestId,
    pub recipient: UserId,
    pub recipient_email: String,
    pub startup_name: String,
    pub outcome: VerificationStatus,
    pub rejection_reason: Option<String>,
    pub reviewed_by: AdminId,
    pub reviewed_at: Timestamp,
}

impl ReviewNotification {
    /// Builds the notification for a request as committed.
    pub fn for_outcome(request: &VerificationRequest, outcome: &ReviewOutcome) -> Self {
        Self {
            request_id: *request.id(),
            recipient: request.owner().clone(),
            recipient_email: request.personal_info().email.clone(),
            startup_name: request.pitch_data().startup_name.clone(),
            outcome: outcome.to,
            rejection_reason: request.rejection_reason().map(str::to_string),
            reviewed_by: outcome.review.reviewed_by.clone(),
            reviewed_at: outcome.review.reviewed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Delivers review outcomes to submitters.
#[async_trait]
pub trait ReviewNotifier: Send + Sync {
    async fn notify(&self, notification: &ReviewNotification) -> Result<(), NotificationError>;
}
