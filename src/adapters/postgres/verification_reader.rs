//! PostgreSQL implementation of VerificationReader.
//!
//! The admin queue and public feed are plain status filters over
//! `verification_requests`; no separate tables are maintained. Keyset
//! cursors are served by the `(status, submitted_at DESC, id DESC)` index.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::UserId;
use crate::domain::verification::{VerificationRequest, VerificationStatus};
use crate::ports::{ListOptions, OwnerCounts, Page, RepositoryError, VerificationReader};

use super::verification_repository::{db_error, row_to_request, REQUEST_COLUMNS};

/// PostgreSQL implementation of VerificationReader.
#[derive(Clone)]
pub struct PostgresVerificationReader {
    pool: PgPool,
}

impl PostgresVerificationReader {
    /// Creates a new PostgresVerificationReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerificationReader for PostgresVerificationReader {
    async fn list_by_status(
        &self,
        status: VerificationStatus,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError> {
        let (after_at, after_id) = cursor_binds(options);

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM verification_requests WHERE status = $1 AND {}",
            after_clause(2)
        ))
        .bind(status.as_str())
        .bind(after_at)
        .bind(after_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count verification requests", e))?;

        let query = format!(
            r#"
            SELECT {}
            FROM verification_requests
            WHERE status = $1 AND {}
            ORDER BY submitted_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
            REQUEST_COLUMNS,
            after_clause(2)
        );
        let rows = sqlx::query(&query)
            .bind(status.as_str())
            .bind(after_at)
            .bind(after_id)
            .bind(i64::from(options.effective_limit()))
            .bind(i64::from(options.effective_offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list verification requests", e))?;

        let items = rows
            .iter()
            .map(row_to_request)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total.max(0) as u64, options))
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        status: Option<VerificationStatus>,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError> {
        let status = status.map(|s| s.as_str());
        let (after_at, after_id) = cursor_binds(options);

        let total: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*) FROM verification_requests
            WHERE user_id = $1 AND ($2::text IS NULL OR status = $2) AND {}
            "#,
            after_clause(3)
        ))
        .bind(owner.as_str())
        .bind(status)
        .bind(after_at)
        .bind(after_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count owner requests", e))?;

        let query = format!(
            r#"
            SELECT {}
            FROM verification_requests
            WHERE user_id = $1 AND ($2::text IS NULL OR status = $2) AND {}
            ORDER BY submitted_at DESC, id DESC
            LIMIT $5 OFFSET $6
            "#,
            REQUEST_COLUMNS,
            after_clause(3)
        );
        let rows = sqlx::query(&query)
            .bind(owner.as_str())
            .bind(status)
            .bind(after_at)
            .bind(after_id)
            .bind(i64::from(options.effective_limit()))
            .bind(i64::from(options.effective_offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list owner requests", e))?;

        let items = rows
            .iter()
            .map(row_to_request)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total.max(0) as u64, options))
    }

    async fn count_by_owner(&self, owner: &UserId) -> Result<OwnerCounts, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS submitted,
                   COUNT(*) FILTER (WHERE status = 'approved') AS approved
            FROM verification_requests
            WHERE user_id = $1
            "#,
        )
        .bind(owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count owner requests", e))?;

        let submitted: i64 = row
            .try_get("submitted")
            .map_err(|e| db_error("Failed to get submitted", e))?;
        let approved: i64 = row
            .try_get("approved")
            .map_err(|e| db_error("Failed to get approved", e))?;

        Ok(OwnerCounts {
            submitted: submitted.max(0) as u64,
            approved: approved.max(0) as u64,
        })
    }
}

/// Keyset predicate over `(submitted_at, id)`; both placeholders are null
/// when no cursor is set. `first` is the index of the timestamp placeholder.
fn after_clause(first: usize) -> String {
    format!(
        "(${a}::timestamptz IS NULL OR (submitted_at, id) < (${a}, ${b}::uuid))",
        a = first,
        b = first + 1
    )
}

fn cursor_binds(
    options: &ListOptions,
) -> (Option<chrono::DateTime<chrono::Utc>>, Option<uuid::Uuid>) {
    match options.after {
        Some(cursor) => (
            Some(*cursor.submitted_at.as_datetime()),
            Some(*cursor.id.as_uuid()),
        ),
        None => (None, None),
    }
}
