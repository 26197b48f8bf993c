//! HTTP routes for feed and dashboard endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{approved_feed, dashboard_counts, my_approved_pitches};

/// Routes mounted under `/api`.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(approved_feed))
        .route("/dashboard", get(dashboard_counts))
        .route("/dashboard/approved", get(my_approved_pitches))
}
