//! Verification workflow error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{AuthError, ErrorCode, ValidationError, VerificationRequestId};

use super::{DocumentCollection, VerificationStatus};

/// Errors returned by verification request operations.
///
/// Guard failures are always typed; callers decide how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Missing or malformed required input.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No request with this id.
    #[error("Verification request not found: {0}")]
    NotFound(VerificationRequestId),

    /// No slot with this id in the named collection.
    #[error("Document '{document_id}' not found in {collection} documents")]
    SlotNotFound {
        collection: DocumentCollection,
        document_id: String,
    },

    /// The state machine does not allow this action from the current state.
    #[error("Cannot {action} a request that is {from}")]
    InvalidTransition {
        from: VerificationStatus,
        action: String,
    },

    /// Approval attempted while required documents are not all approved.
    #[error("Required documents not approved: {}", pending.join(", "))]
    IncompleteDocuments { pending: Vec<String> },

    /// Caller identity missing, invalid, or lacking the required role.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    /// Caller is authenticated but does not own the request.
    #[error("Permission denied")]
    Forbidden,

    /// Persistence unavailable or contended. Retryable by the caller.
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl VerificationError {
    pub fn invalid_transition(from: VerificationStatus, action: impl Into<String>) -> Self {
        VerificationError::InvalidTransition {
            from,
            action: action.into(),
        }
    }

    pub fn slot_not_found(collection: DocumentCollection, document_id: impl Into<String>) -> Self {
        VerificationError::SlotNotFound {
            collection,
            document_id: document_id.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        VerificationError::StorageFailure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            VerificationError::Validation(_) => ErrorCode::ValidationFailed,
            VerificationError::NotFound(_) => ErrorCode::VerificationRequestNotFound,
            VerificationError::SlotNotFound { .. } => ErrorCode::DocumentSlotNotFound,
            VerificationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            VerificationError::IncompleteDocuments { .. } => ErrorCode::IncompleteDocuments,
            VerificationError::Unauthorized(AuthError::InsufficientPermissions) => {
                ErrorCode::Forbidden
            }
            VerificationError::Unauthorized(_) => ErrorCode::Unauthorized,
            VerificationError::Forbidden => ErrorCode::Forbidden,
            VerificationError::StorageFailure(_) => ErrorCode::StorageFailure,
        }
    }

    /// Returns true if the caller may retry the same call unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VerificationError::StorageFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_documents_lists_pending_slots() {
        let err = VerificationError::IncompleteDocuments {
            pending: vec!["id_proof".to_string(), "pitch_deck".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Required documents not approved: id_proof, pitch_deck"
        );
        assert_eq!(err.code(), ErrorCode::IncompleteDocuments);
    }

    #[test]
    fn invalid_transition_names_state_and_action() {
        let err = VerificationError::invalid_transition(VerificationStatus::Approved, "reject");
        assert_eq!(err.to_string(), "Cannot reject a request that is approved");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn insufficient_permissions_maps_to_forbidden() {
        let err = VerificationError::from(AuthError::InsufficientPermissions);
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(
            VerificationError::from(AuthError::InvalidToken).code(),
            ErrorCode::Unauthorized
        );
    }

    #[test]
    fn only_storage_failures_are_retryable() {
        assert!(VerificationError::storage("pool timeout").is_retryable());
        assert!(!VerificationError::Forbidden.is_retryable());
    }

    #[test]
    fn validation_errors_convert() {
        let err: VerificationError = ValidationError::empty_field("email").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
