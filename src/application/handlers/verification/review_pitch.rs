//! ReviewPitchHandler - Admin command for approve / reject / clarify.
//!
//! The transition is a compare-and-swap on the request version. When two
//! admins race, the loser re-reads the committed state and re-runs the
//! guards, which usually turns a second terminal transition into
//! `InvalidTransition`.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, Timestamp, VerificationRequestId};
use crate::domain::verification::{
    ReviewDecision, ReviewOutcome, VerificationError, VerificationRequest,
};
use crate::ports::{ReviewNotification, ReviewNotifier, VerificationRepository};

use super::versioned_update::update_with_retry;

/// Command to apply an admin decision to a request.
#[derive(Debug, Clone)]
pub struct ReviewPitchCommand {
    pub request_id: VerificationRequestId,
    pub decision: ReviewDecision,
}

/// Result of a committed review.
#[derive(Debug, Clone)]
pub struct ReviewPitchResult {
    pub request: VerificationRequest,
    pub outcome: ReviewOutcome,
}

/// Handler for admin review transitions.
pub struct ReviewPitchHandler {
    repository: Arc<dyn VerificationRepository>,
    notifier: Arc<dyn ReviewNotifier>,
}

impl ReviewPitchHandler {
    pub fn new(
        repository: Arc<dyn VerificationRepository>,
        notifier: Arc<dyn ReviewNotifier>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReviewPitchCommand,
        metadata: CommandMetadata,
    ) -> Result<ReviewPitchResult, VerificationError> {
        let admin = metadata.caller.admin_id()?;
        let action = cmd.decision.action();

        let (request, outcome) =
            update_with_retry(self.repository.as_ref(), &cmd.request_id, |request| {
                request.apply_review(cmd.decision.clone(), admin.clone(), Timestamp::now())
            })
            .await
            .map_err(|e| {
                tracing::info!(
                    request_id = %cmd.request_id,
                    action,
                    admin = %admin,
                    error = %e,
                    "Review refused"
                );
                e
            })?;

        tracing::info!(
            request_id = %cmd.request_id,
            from = %outcome.from,
            to = %outcome.to,
            admin = %admin,
            version = request.version(),
            correlation_id = %metadata.correlation_id(),
            "Review committed"
        );

        if outcome.should_notify() {
            self.notify(&request, &outcome).await;
        }

        Ok(ReviewPitchResult { request, outcome })
    }

    /// Delivery failures are logged and dropped; the transition stands.
    async fn notify(&self, request: &VerificationRequest, outcome: &ReviewOutcome) {
        let notification = ReviewNotification::for_outcome(request, outcome);
        if let Err(e) = self.notifier.notify(&notification).await {
            tracing::warn!(
                request_id = %request.id(),
                outcome = %outcome.to,
                error = %e,
                "Review notification failed"
            );
        }
    }
}
