//! Error bodies and status mapping shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, ErrorCode, ValidationError};
use crate::domain::verification::VerificationError;

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `INCOMPLETE_DOCUMENTS`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Status code for each error category.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::VerificationRequestNotFound | ErrorCode::DocumentSlotNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::IncompleteDocuments => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::StorageFailure => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Verification error rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub VerificationError);

impl From<VerificationError> for ApiError {
    fn from(err: VerificationError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(VerificationError::Validation(err))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(VerificationError::Unauthorized(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code();
        let status = status_for(code);

        let mut body = ErrorResponse::new(code.to_string(), self.0.to_string());
        match &self.0 {
            VerificationError::IncompleteDocuments { pending } => {
                body = body.with_details(serde_json::json!({ "pending": pending }));
            }
            VerificationError::Validation(v) => {
                body = body.with_details(serde_json::json!({ "field": v.field() }));
            }
            VerificationError::StorageFailure(detail) => {
                tracing::error!(error = %detail, "Storage failure surfaced to client");
                body.message = "Storage temporarily unavailable, retry later".to_string();
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::VerificationRequestId;
    use crate::domain::verification::VerificationStatus;

    fn status_of(err: VerificationError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn each_error_maps_to_its_status() {
        assert_eq!(
            status_of(ValidationError::empty_field("email").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(VerificationError::NotFound(VerificationRequestId::new())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(VerificationError::invalid_transition(
                VerificationStatus::Approved,
                "reject"
            )),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(VerificationError::IncompleteDocuments {
                pending: vec!["id_proof".into()]
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AuthError::InvalidToken.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AuthError::InsufficientPermissions.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(status_of(VerificationError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(VerificationError::storage("pool timed out")),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("FORBIDDEN", "Permission denied"))
            .unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert!(json.get("details").is_none());
    }
}
