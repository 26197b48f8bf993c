//! Per-user dashboard counters.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::verification::VerificationError;
use crate::ports::{MessageCounter, VerificationReader};

/// Totals shown on an entrepreneur's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub submitted: u64,
    pub approved: u64,
    pub unread_messages: u64,
}

pub struct DashboardCountsHandler {
    reader: Arc<dyn VerificationReader>,
    messages: Arc<dyn MessageCounter>,
}

impl DashboardCountsHandler {
    pub fn new(reader: Arc<dyn VerificationReader>, messages: Arc<dyn MessageCounter>) -> Self {
        Self { reader, messages }
    }

    pub async fn handle(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<DashboardCounts, VerificationError> {
        let (counts, unread) = tokio::try_join!(
            self.reader.count_by_owner(&caller.id),
            self.messages.unread_count(&caller.id),
        )?;

        Ok(DashboardCounts {
            submitted: counts.submitted,
            approved: counts.approved,
            unread_messages: unread,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMessageCounter;
    use crate::application::handlers::verification::test_support::{
        acme_for, caller, founder, store_with,
    };
    use crate::domain::foundation::{AdminId, Role, Timestamp};
    use crate::domain::verification::ReviewDecision;
    use crate::ports::VerificationRepository;

    #[tokio::test]
    async fn counts_owned_requests_and_unread_messages() {
        let store = store_with(&acme_for(&founder())).await;
        let mut approved = acme_for(&founder());
        approved
            .apply_review(
                ReviewDecision::Approve,
                AdminId::new("admin-1").unwrap(),
                Timestamp::now(),
            )
            .unwrap();
        store.insert(&approved).await.unwrap();
        let messages = Arc::new(InMemoryMessageCounter::new().with_unread(founder().id, 3));
        let handler = DashboardCountsHandler::new(store, messages);

        let counts = handler.handle(&founder()).await.unwrap();

        assert_eq!(
            counts,
            DashboardCounts {
                submitted: 2,
                approved: 1,
                unread_messages: 3
            }
        );
    }

    #[tokio::test]
    async fn new_user_has_zero_everything() {
        let store = store_with(&acme_for(&founder())).await;
        let handler =
            DashboardCountsHandler::new(store, Arc::new(InMemoryMessageCounter::new()));

        let counts = handler
            .handle(&caller("new-user", Role::Entrepreneur))
            .await
            .unwrap();

        assert_eq!(counts.submitted, 0);
        assert_eq!(counts.approved, 0);
        assert_eq!(counts.unread_messages, 0);
    }
}
