//! Message counter port.
//!
//! The messaging system is an external collaborator; the dashboard only
//! needs the number of unread messages addressed to a user.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

use super::RepositoryError;

/// Reads unread-message totals from the messaging store.
#[async_trait]
pub trait MessageCounter: Send + Sync {
    /// Count messages addressed to `recipient` that are not yet read.
    async fn unread_count(&self, recipient: &UserId) -> Result<u64, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_counter_is_object_safe() {
        fn _accepts_dyn(_counter: &dyn MessageCounter) {}
    }
}
