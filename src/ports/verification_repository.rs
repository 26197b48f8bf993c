//! Verification repository port (write side).
//!
//! Defines the contract for persisting and retrieving VerificationRequest
//! aggregates.
//!
//! # Consistency
//!
//! - `update` is a compare-and-swap on the aggregate version. Two writers
//!   that read the same version cannot both commit.
//! - `apply_document_change` reads, mutates and writes one request as a
//!   single atomic step inside the store. Concurrent changes to the same
//!   request serialize and never lose files.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::VerificationRequestId;
use crate::domain::verification::{
    DocumentChange, DocumentSlot, VerificationError, VerificationRequest,
};

/// Errors from verification persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Verification request not found: {0}")]
    NotFound(VerificationRequestId),

    /// Another writer committed since the caller's read.
    #[error("Version conflict on {id}: expected {expected}")]
    Conflict {
        id: VerificationRequestId,
        expected: u64,
    },

    /// A domain guard refused the change inside an atomic update.
    #[error(transparent)]
    Rejected(#[from] VerificationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl RepositoryError {
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database(message.into())
    }
}

impl From<RepositoryError> for VerificationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => VerificationError::NotFound(id),
            RepositoryError::Rejected(inner) => inner,
            RepositoryError::Conflict { id, .. } => {
                VerificationError::storage(format!("concurrent update on {}", id))
            }
            RepositoryError::Database(message) => VerificationError::StorageFailure(message),
        }
    }
}

/// Repository port for VerificationRequest persistence.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Persist a newly created request at version 0.
    async fn insert(&self, request: &VerificationRequest) -> Result<(), RepositoryError>;

    /// Find a request by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError>;

    /// Write every field of `request` if the stored version still equals
    /// `expected_version`. Returns the new version.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the request doesn't exist
    /// - `Conflict` if another writer committed first
    async fn update(
        &self,
        request: &VerificationRequest,
        expected_version: u64,
    ) -> Result<u64, RepositoryError>;

    /// Apply a document change atomically against the latest stored state.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the request doesn't exist
    /// - `Rejected` if the change fails a domain guard (nothing is written)
    async fn apply_document_change(
        &self,
        id: &VerificationRequestId,
        change: &DocumentChange,
    ) -> Result<DocumentSlot, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn verification_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn VerificationRepository) {}
    }

    #[test]
    fn conflict_surfaces_as_storage_failure() {
        let id = VerificationRequestId::new();
        let err: VerificationError = RepositoryError::Conflict { id, expected: 3 }.into();
        assert!(err.is_retryable());
    }

    #[test]
    fn rejected_unwraps_domain_error() {
        let domain = VerificationError::from(ValidationError::empty_field("document_id"));
        let err: VerificationError = RepositoryError::Rejected(domain.clone()).into();
        assert_eq!(err, domain);
    }

    #[test]
    fn not_found_keeps_id() {
        let id = VerificationRequestId::new();
        let err: VerificationError = RepositoryError::NotFound(id).into();
        assert_eq!(err, VerificationError::NotFound(id));
    }
}
