//! In-memory unread message counter.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{MessageCounter, RepositoryError};

/// Unread totals keyed by recipient. Unknown recipients have zero.
#[derive(Debug, Default)]
pub struct InMemoryMessageCounter {
    unread: RwLock<HashMap<UserId, u64>>,
}

impl InMemoryMessageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unread(self, recipient: UserId, count: u64) -> Self {
        self.set_unread(recipient, count);
        self
    }

    pub fn set_unread(&self, recipient: UserId, count: u64) {
        self.unread
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(recipient, count);
    }
}

#[async_trait]
impl MessageCounter for InMemoryMessageCounter {
    async fn unread_count(&self, recipient: &UserId) -> Result<u64, RepositoryError> {
        Ok(self
            .unread
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(recipient)
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_recipient_has_zero() {
        let counter = InMemoryMessageCounter::new();
        let count = counter.unread_count(&UserId::new("u1").unwrap()).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn returns_configured_count() {
        let user = UserId::new("u1").unwrap();
        let counter = InMemoryMessageCounter::new().with_unread(user.clone(), 4);
        assert_eq!(counter.unread_count(&user).await.unwrap(), 4);
    }
}
