//! PostgreSQL implementation of MessageCounter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::UserId;
use crate::ports::{MessageCounter, RepositoryError};

use super::verification_repository::db_error;

/// Counts unread rows in the messaging feature's `messages` table.
#[derive(Clone)]
pub struct PostgresMessageCounter {
    pool: PgPool,
}

impl PostgresMessageCounter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageCounter for PostgresMessageCounter {
    async fn unread_count(&self, recipient: &UserId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(recipient.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count unread messages", e))?;

        Ok(count.max(0) as u64)
    }
}
