//! ResubmitPitchHandler - Owner command returning a request to the queue.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, VerificationRequestId};
use crate::domain::verification::{VerificationError, VerificationRequest};
use crate::ports::VerificationRepository;

use super::versioned_update::update_with_retry;

/// Command to resubmit a request after answering a clarification.
#[derive(Debug, Clone)]
pub struct ResubmitPitchCommand {
    pub request_id: VerificationRequestId,
}

/// Handler for owner resubmissions.
pub struct ResubmitPitchHandler {
    repository: Arc<dyn VerificationRepository>,
}

impl ResubmitPitchHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ResubmitPitchCommand,
        metadata: CommandMetadata,
    ) -> Result<VerificationRequest, VerificationError> {
        let caller = &metadata.caller;
        let (request, ()) =
            update_with_retry(self.repository.as_ref(), &cmd.request_id, |request| {
                request.authorize_owner(caller)?;
                request.resubmit()
            })
            .await?;

        tracing::info!(
            request_id = %cmd.request_id,
            owner = %request.owner(),
            correlation_id = %metadata.correlation_id(),
            "Pitch resubmitted for review"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::verification::test_support::{
        acme_for, admin, founder, metadata, store_with,
    };
    use crate::domain::foundation::{AdminId, Timestamp};
    use crate::domain::verification::{ReviewDecision, VerificationStatus};

    fn needing_clarification() -> VerificationRequest {
        let mut request = acme_for(&founder());
        request
            .apply_review(
                ReviewDecision::RequestClarification,
                AdminId::new("admin-1").unwrap(),
                Timestamp::now(),
            )
            .unwrap();
        request
    }

    #[tokio::test]
    async fn owner_resubmits_to_pending() {
        let request = needing_clarification();
        let store = store_with(&request).await;
        let handler = ResubmitPitchHandler::new(store);

        let updated = handler
            .handle(
                ResubmitPitchCommand {
                    request_id: *request.id(),
                },
                metadata(founder()),
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), VerificationStatus::Pending);
        assert!(updated.review().is_some());
    }

    #[tokio::test]
    async fn only_owner_may_resubmit() {
        let request = needing_clarification();
        let store = store_with(&request).await;
        let handler = ResubmitPitchHandler::new(store);

        let result = handler
            .handle(
                ResubmitPitchCommand {
                    request_id: *request.id(),
                },
                metadata(admin()),
            )
            .await;

        assert_eq!(result, Err(VerificationError::Forbidden));
    }

    #[tokio::test]
    async fn pending_request_cannot_be_resubmitted() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = ResubmitPitchHandler::new(store);

        let result = handler
            .handle(
                ResubmitPitchCommand {
                    request_id: *request.id(),
                },
                metadata(founder()),
            )
            .await;

        assert!(matches!(
            result,
            Err(VerificationError::InvalidTransition { .. })
        ));
    }
}
