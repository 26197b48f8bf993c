//! HTTP handlers for the entrepreneur-facing pitch endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::request;
use crate::adapters::http::state::AppState;
use crate::application::{
    ClearDocumentCommand, GetPitchQuery, ListByOwnerQuery, ResubmitPitchCommand,
    SubmitPitchCommand, UploadDocumentCommand,
};
use crate::domain::foundation::{UserProfileId, ValidationError};

use super::dto::{
    DocumentSlotResponse, ListParams, PageResponse, PitchResponse, SubmitPitchRequest,
    UploadDocumentRequest,
};

/// POST /api/pitches
pub async fn submit_pitch(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(body): Json<SubmitPitchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_profile_id = body
        .user_profile_id
        .as_deref()
        .map(|raw| {
            raw.parse::<UserProfileId>()
                .map_err(|_| ValidationError::invalid_format("user_profile_id", "not a uuid"))
        })
        .transpose()?;

    let cmd = SubmitPitchCommand {
        personal_info: body.personal_info.into_domain(user.id.clone()),
        pitch_data: body.pitch_data,
        user_profile_id,
    };
    let request = state
        .submit_pitch_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok((StatusCode::CREATED, Json(PitchResponse::from(&request))))
}

/// GET /api/pitches/mine
pub async fn list_my_pitches(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListByOwnerQuery {
        status: params.status()?,
        options: params.options(),
    };
    let page = state.list_by_owner_handler().handle(query, &user).await?;

    Ok(Json(PageResponse::from_page(page, |r| PitchResponse::from(&r))))
}

/// GET /api/pitches/:id
pub async fn get_pitch(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetPitchQuery {
        request_id: request::request_id(&id)?,
    };
    let pitch = state.get_pitch_handler().handle(query, &user).await?;

    Ok(Json(PitchResponse::from(&pitch)))
}

/// PUT /api/pitches/:id/documents/:collection/:document_id
pub async fn upload_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path((id, collection, document_id)): Path<(String, String, String)>,
    Json(body): Json<UploadDocumentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UploadDocumentCommand {
        request_id: request::request_id(&id)?,
        collection: request::collection(&collection)?,
        document_id,
        document_type: body.document_type,
        file_urls: body.file_urls,
    };
    let slot = state
        .upload_document_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok(Json(DocumentSlotResponse::from(&slot)))
}

/// DELETE /api/pitches/:id/documents/:collection/:document_id/files
pub async fn clear_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path((id, collection, document_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ClearDocumentCommand {
        request_id: request::request_id(&id)?,
        collection: request::collection(&collection)?,
        document_id,
    };
    let slot = state
        .clear_document_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok(Json(DocumentSlotResponse::from(&slot)))
}

/// POST /api/pitches/:id/resubmit
pub async fn resubmit_pitch(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ResubmitPitchCommand {
        request_id: request::request_id(&id)?,
    };
    let pitch = state
        .resubmit_pitch_handler()
        .handle(cmd, request::metadata(user, &headers))
        .await?;

    Ok(Json(PitchResponse::from(&pitch)))
}
