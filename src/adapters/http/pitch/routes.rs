//! Router for entrepreneur-facing pitch endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    clear_document, get_pitch, list_my_pitches, resubmit_pitch, submit_pitch, upload_document,
};

/// Routes mounted under `/api/pitches`.
pub fn pitch_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_pitch))
        .route("/mine", get(list_my_pitches))
        .route("/:id", get(get_pitch))
        .route("/:id/resubmit", post(resubmit_pitch))
        .route(
            "/:id/documents/:collection/:document_id",
            put(upload_document),
        )
        .route(
            "/:id/documents/:collection/:document_id/files",
            delete(clear_document),
        )
}
