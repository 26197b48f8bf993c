//! HTTP adapters - REST API for the pitch review workflow.
//!
//! Each area has its own module with DTOs, handlers and a router; `router`
//! assembles them behind the auth middleware and `app` adds the transport
//! layers configured in `ServerConfig`.

pub mod admin;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod middleware;
pub mod pitch;
pub mod request;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// All routes with authentication applied, without transport layers.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/pitches", pitch::pitch_routes())
        .nest("/admin", admin::admin_routes())
        .merge(dashboard::dashboard_routes());

    Router::new()
        .nest("/api", api)
        .merge(health::health_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.session_validator.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}

/// The served application: `router` plus tracing, timeout and CORS.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    router(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
}
