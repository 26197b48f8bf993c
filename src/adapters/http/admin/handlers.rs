//! HTTP handlers for admin review endpoints.
//!
//! Role checks happen in the application handlers; a non-admin caller gets
//! 403 from the error mapping.

use axum::extract::{Json, Path, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::pitch::dto::{
    DocumentSlotResponse, ListParams, PageResponse, PitchResponse, RejectPitchRequest,
    SetDocumentStatusRequest,
};
use crate::adapters::http::request;
use crate::adapters::http::state::AppState;
use crate::application::{ListByStatusQuery, ReviewPitchCommand, SetDocumentStatusCommand};
use crate::domain::foundation::{AuthenticatedUser, ValidationError};
use crate::domain::verification::{ReviewDecision, VerificationStatus};

/// Result of a review action.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub from: VerificationStatus,
    pub to: VerificationStatus,
    pub notified: bool,
    pub pitch: PitchResponse,
}

/// GET /api/admin/queue
pub async fn admin_queue(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .admin_queue_handler()
        .handle(&user, params.options())
        .await?;

    Ok(Json(PageResponse::from_page(page, |r| PitchResponse::from(&r))))
}

/// GET /api/admin/pitches?status=
pub async fn list_by_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let status = params
        .status()?
        .ok_or_else(|| ValidationError::empty_field("status"))?;
    let query = ListByStatusQuery {
        status,
        options: params.options(),
    };
    let page = state.list_by_status_handler().handle(query, &user).await?;

    Ok(Json(PageResponse::from_page(page, |r| PitchResponse::from(&r))))
}

/// PUT /api/admin/pitches/:id/documents/:collection/:document_id/status
pub async fn set_document_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path((id, collection, document_id)): Path<(String, String, String)>,
    Json(body): Json<SetDocumentStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SetDocumentStatusCommand {
        request_id: request::request_id(&id)?,
        collection: request::collection(&collection)?,
        document_id,
        status: request::document_status(&body.status)?,
    };
    let slot = state
        .set_document_status_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok(Json(DocumentSlotResponse::from(&slot)))
}

/// POST /api/admin/pitches/:id/approve
pub async fn approve_pitch(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    review(state, user, headers, &id, ReviewDecision::Approve).await
}

/// POST /api/admin/pitches/:id/reject
pub async fn reject_pitch(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<RejectPitchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    review(state, user, headers, &id, ReviewDecision::reject(body.reason)).await
}

/// POST /api/admin/pitches/:id/request-clarification
pub async fn request_clarification(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    review(
        state,
        user,
        headers,
        &id,
        ReviewDecision::RequestClarification,
    )
    .await
}

async fn review(
    state: AppState,
    user: AuthenticatedUser,
    headers: HeaderMap,
    id: &str,
    decision: ReviewDecision,
) -> Result<Json<ReviewResponse>, ApiError> {
    let cmd = ReviewPitchCommand {
        request_id: request::request_id(id)?,
        decision,
    };
    let result = state
        .review_pitch_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok(Json(ReviewResponse {
        from: result.outcome.from,
        to: result.outcome.to,
        notified: result.outcome.should_notify(),
        pitch: PitchResponse::from(&result.request),
    }))
}
