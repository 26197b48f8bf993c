//! HTTP handlers for the public feed and the entrepreneur dashboard.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::pitch::dto::{ListParams, PageResponse, PitchSummaryResponse};
use crate::adapters::http::state::AppState;

use super::dto::DashboardResponse;

/// GET /api/feed - public, no caller required.
pub async fn approved_feed(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .approved_feed_handler()
        .handle(params.options())
        .await?;

    Ok(Json(PageResponse::from_page(page, PitchSummaryResponse::from)))
}

/// GET /api/dashboard
pub async fn dashboard_counts(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let counts = state.dashboard_counts_handler().handle(&user).await?;
    Ok(Json(DashboardResponse::from(counts)))
}

/// GET /api/dashboard/approved
pub async fn my_approved_pitches(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .my_approved_pitches_handler()
        .handle(&user, params.options())
        .await?;

    Ok(Json(PageResponse::from_page(page, PitchSummaryResponse::from)))
}
