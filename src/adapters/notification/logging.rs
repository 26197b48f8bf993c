//! Log-only review notifier.
//!
//! Stands in for the email collaborator: every notification becomes one
//! structured `info` event.

use async_trait::async_trait;

use crate::ports::{NotificationError, ReviewNotification, ReviewNotifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReviewNotifier;

impl LoggingReviewNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReviewNotifier for LoggingReviewNotifier {
    async fn notify(&self, notification: &ReviewNotification) -> Result<(), NotificationError> {
        tracing::info!(
            request_id = %notification.request_id,
            recipient = %notification.recipient,
            outcome = %notification.outcome,
            reviewed_by = %notification.reviewed_by,
            startup_name = %notification.startup_name,
            "Review outcome notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AdminId, Timestamp, UserId, VerificationRequestId};
    use crate::domain::verification::VerificationStatus;

    #[tokio::test]
    async fn logging_never_fails() {
        let notification = ReviewNotification {
            request_id: VerificationRequestId::new(),
            recipient: UserId::new("u1").unwrap(),
            recipient_email: "a@b.com".to_string(),
            startup_name: "Acme".to_string(),
            outcome: VerificationStatus::Approved,
            rejection_reason: None,
            reviewed_by: AdminId::new("a1").unwrap(),
            reviewed_at: Timestamp::now(),
        };
        assert!(LoggingReviewNotifier::new().notify(&notification).await.is_ok());
    }
}
