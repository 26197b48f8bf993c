//! PostgreSQL implementation of VerificationRepository.
//!
//! One row per request. Personal info, pitch data and documents are JSONB
//! columns; status and the review stamp are plain columns so the feed and
//! queue can be served by indexed status filters.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    AdminId, Timestamp, UserProfileId, VerificationRequestId,
};
use crate::domain::verification::{
    DocumentChange, DocumentSet, DocumentSlot, PersonalInfo, PitchData, Review,
    VerificationRequest, VerificationStatus,
};
use crate::ports::{RepositoryError, VerificationRepository};

/// Columns needed to reconstitute a request, in `row_to_request` order.
pub(super) const REQUEST_COLUMNS: &str = "id, personal_info, pitch_data, documents, status, \
     rejection_reason, submitted_at, reviewed_at, reviewed_by, user_profile_id, score, version";

/// PostgreSQL implementation of VerificationRepository.
#[derive(Clone)]
pub struct PostgresVerificationRepository {
    pool: PgPool,
}

impl PostgresVerificationRepository {
    /// Creates a new PostgresVerificationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &VerificationRequestId) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT 1 FROM verification_requests WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check verification request", e))?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl VerificationRepository for PostgresVerificationRepository {
    async fn insert(&self, request: &VerificationRequest) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO verification_requests (
                id, user_id, personal_info, pitch_data, documents, status,
                rejection_reason, submitted_at, reviewed_at, reviewed_by,
                user_profile_id, score, version
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(request.owner().as_str())
        .bind(Json(request.personal_info()))
        .bind(Json(request.pitch_data()))
        .bind(Json(request.documents()))
        .bind(request.status().as_str())
        .bind(request.rejection_reason())
        .bind(request.submitted_at().as_datetime())
        .bind(request.reviewed_at().map(|t| *t.as_datetime()))
        .bind(request.reviewed_by().map(AdminId::as_str))
        .bind(request.user_profile_id().map(|p| *p.as_uuid()))
        .bind(request.score())
        .bind(to_db_version(request.version())?)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert verification request", e))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM verification_requests WHERE id = $1",
            REQUEST_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch verification request", e))?;

        row.as_ref().map(row_to_request).transpose()
    }

    async fn update(
        &self,
        request: &VerificationRequest,
        expected_version: u64,
    ) -> Result<u64, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE verification_requests SET
                personal_info = $2,
                pitch_data = $3,
                documents = $4,
                status = $5,
                rejection_reason = $6,
                reviewed_at = $7,
                reviewed_by = $8,
                score = $9,
                version = version + 1
            WHERE id = $1 AND version = $10
            RETURNING version
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(Json(request.personal_info()))
        .bind(Json(request.pitch_data()))
        .bind(Json(request.documents()))
        .bind(request.status().as_str())
        .bind(request.rejection_reason())
        .bind(request.reviewed_at().map(|t| *t.as_datetime()))
        .bind(request.reviewed_by().map(AdminId::as_str))
        .bind(request.score())
        .bind(to_db_version(expected_version)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update verification request", e))?;

        if let Some(row) = row {
            let version: i64 = row
                .try_get("version")
                .map_err(|e| db_error("Failed to get version", e))?;
            return from_db_version(version);
        }

        if self.exists(request.id()).await? {
            Err(RepositoryError::Conflict {
                id: *request.id(),
                expected: expected_version,
            })
        } else {
            Err(RepositoryError::NotFound(*request.id()))
        }
    }

    async fn apply_document_change(
        &self,
        id: &VerificationRequestId,
        change: &DocumentChange,
    ) -> Result<DocumentSlot, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to start transaction", e))?;

        let query = format!(
            "SELECT {} FROM verification_requests WHERE id = $1 FOR UPDATE",
            REQUEST_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock verification request", e))?
            .ok_or(RepositoryError::NotFound(*id))?;

        let mut request = row_to_request(&row)?;
        // A guard failure returns here and the dropped transaction rolls back.
        let slot = change.apply(&mut request)?;

        sqlx::query(
            r#"
            UPDATE verification_requests
            SET documents = $2, version = version + 1
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(Json(request.documents()))
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update documents", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(slot)
    }
}

pub(super) fn db_error(context: &str, err: sqlx::Error) -> RepositoryError {
    RepositoryError::database(format!("{}: {}", context, err))
}

fn to_db_version(version: u64) -> Result<i64, RepositoryError> {
    i64::try_from(version).map_err(|_| RepositoryError::database("version out of range"))
}

fn from_db_version(version: i64) -> Result<u64, RepositoryError> {
    u64::try_from(version).map_err(|_| RepositoryError::database("negative version"))
}

fn str_to_status(s: &str) -> Result<VerificationStatus, RepositoryError> {
    s.parse()
        .map_err(|_| RepositoryError::database(format!("Invalid verification status: {}", s)))
}

/// Rebuilds the aggregate from a row selected with `REQUEST_COLUMNS`.
pub(super) fn row_to_request(row: &PgRow) -> Result<VerificationRequest, RepositoryError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;
    let personal_info: Json<PersonalInfo> = row
        .try_get("personal_info")
        .map_err(|e| db_error("Failed to get personal_info", e))?;
    let pitch_data: Json<PitchData> = row
        .try_get("pitch_data")
        .map_err(|e| db_error("Failed to get pitch_data", e))?;
    let documents: Json<DocumentSet> = row
        .try_get("documents")
        .map_err(|e| db_error("Failed to get documents", e))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| db_error("Failed to get status", e))?;
    let rejection_reason: Option<String> = row
        .try_get("rejection_reason")
        .map_err(|e| db_error("Failed to get rejection_reason", e))?;
    let submitted_at: chrono::DateTime<chrono::Utc> = row
        .try_get("submitted_at")
        .map_err(|e| db_error("Failed to get submitted_at", e))?;
    let reviewed_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("reviewed_at")
        .map_err(|e| db_error("Failed to get reviewed_at", e))?;
    let reviewed_by: Option<String> = row
        .try_get("reviewed_by")
        .map_err(|e| db_error("Failed to get reviewed_by", e))?;
    let user_profile_id: Option<uuid::Uuid> = row
        .try_get("user_profile_id")
        .map_err(|e| db_error("Failed to get user_profile_id", e))?;
    let score: Option<f64> = row
        .try_get("score")
        .map_err(|e| db_error("Failed to get score", e))?;
    let version: i64 = row
        .try_get("version")
        .map_err(|e| db_error("Failed to get version", e))?;

    let review = match (reviewed_at, reviewed_by) {
        (Some(at), Some(by)) => Some(Review {
            reviewed_at: Timestamp::from_datetime(at),
            reviewed_by: AdminId::new(by)
                .map_err(|e| RepositoryError::database(format!("Invalid reviewer: {}", e)))?,
        }),
        (None, None) => None,
        _ => {
            return Err(RepositoryError::database(
                "reviewed_at and reviewed_by must be set together",
            ))
        }
    };

    Ok(VerificationRequest::reconstitute(
        VerificationRequestId::from_uuid(id),
        personal_info.0,
        pitch_data.0,
        documents.0,
        str_to_status(&status)?,
        rejection_reason,
        Timestamp::from_datetime(submitted_at),
        review,
        user_profile_id.map(UserProfileId::from_uuid),
        score,
        from_db_version(version)?,
    ))
}
