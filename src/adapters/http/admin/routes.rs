//! Router for admin review endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    admin_queue, approve_pitch, list_by_status, reject_pitch, request_clarification,
    set_document_status,
};

/// Routes mounted under `/api/admin`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/queue", get(admin_queue))
        .route("/pitches", get(list_by_status))
        .route(
            "/pitches/:id/documents/:collection/:document_id/status",
            put(set_document_status),
        )
        .route("/pitches/:id/approve", post(approve_pitch))
        .route("/pitches/:id/reject", post(reject_pitch))
        .route(
            "/pitches/:id/request-clarification",
            post(request_clarification),
        )
}
