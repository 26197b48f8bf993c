//! Integration tests for the HTTP surface.
//!
//! The full router runs in-process over in-memory adapters; requests go
//! through `tower::ServiceExt::oneshot`, auth through `MockSessionValidator`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pitch_review::adapters::auth::MockSessionValidator;
use pitch_review::adapters::http::{router, AppState};
use pitch_review::adapters::memory::{InMemoryMessageCounter, InMemoryVerificationStore};
use pitch_review::adapters::notification::RecordingReviewNotifier;
use pitch_review::config::ReviewConfig;
use pitch_review::domain::foundation::UserId;

// =============================================================================
// Test Infrastructure
// =============================================================================

const FOUNDER: &str = "founder-token";
const OTHER: &str = "other-token";
const ADMIN: &str = "admin-token";

struct TestApp {
    router: Router,
    store: Arc<InMemoryVerificationStore>,
    notifier: Arc<RecordingReviewNotifier>,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(InMemoryVerificationStore::new());
        let notifier = Arc::new(RecordingReviewNotifier::new());
        let messages = Arc::new(
            InMemoryMessageCounter::new().with_unread(UserId::new("founder-1").unwrap(), 2),
        );
        let validator = MockSessionValidator::new()
            .with_entrepreneur(FOUNDER, "founder-1")
            .with_entrepreneur(OTHER, "founder-2")
            .with_admin(ADMIN, "admin-1");

        let state = AppState {
            repository: store.clone(),
            reader: store.clone(),
            messages,
            notifier: notifier.clone(),
            session_validator: Arc::new(validator),
            review: ReviewConfig::default(),
        };

        Self {
            router: router(state),
            store,
            notifier,
        }
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn submit_acme(&self) -> String {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/pitches",
                Some(FOUNDER),
                Some(json!({
                    "personal_info": { "email": "a@b.com", "full_name": "Ada" },
                    "pitch_data": { "video_url": "v1", "startup_name": "Acme", "is_public": true }
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn acme_scenario_over_http() {
    let app = TestApp::new();
    let id = app.submit_acme().await;

    let (status, slot) = app
        .call(
            Method::PUT,
            &format!("/api/pitches/{}/documents/required/id_proof", id),
            Some(FOUNDER),
            Some(json!({ "document_type": "government_id", "file_urls": ["f1"] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot["file_count"], 1);
    assert_eq!(slot["status"], "pending_verification");

    let (status, queue) = app
        .call(Method::GET, "/api/admin/queue", Some(ADMIN), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue["total"], 1);

    let (status, _) = app
        .call(
            Method::PUT,
            &format!("/api/admin/pitches/{}/documents/required/id_proof/status", id),
            Some(ADMIN),
            Some(json!({ "status": "approved" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, review) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/approve", id),
            Some(ADMIN),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["to"], "approved");
    assert_eq!(review["pitch"]["reviewed_by"], "admin-1");

    let (status, feed) = app.call(Method::GET, "/api/feed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(feed["items"][0]["pitch_data"]["startup_name"], "Acme");

    let (_, queue) = app
        .call(Method::GET, "/api/admin/queue", Some(ADMIN), None)
        .await;
    assert_eq!(queue["total"], 0);
    assert_eq!(app.notifier.sent_count(), 1);
}

#[tokio::test]
async fn dashboard_reports_counts_and_unread_messages() {
    let app = TestApp::new();
    let id = app.submit_acme().await;
    app.submit_acme().await;
    app.call(
        Method::POST,
        &format!("/api/admin/pitches/{}/approve", id),
        Some(ADMIN),
        None,
    )
    .await;

    let (status, counts) = app
        .call(Method::GET, "/api/dashboard", Some(FOUNDER), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        counts,
        json!({ "submitted": 2, "approved": 1, "unread_messages": 2 })
    );

    let (_, mine) = app
        .call(Method::GET, "/api/dashboard/approved", Some(FOUNDER), None)
        .await;
    assert_eq!(mine["total"], 1);

    let (_, pending) = app
        .call(Method::GET, "/api/pitches/mine?status=pending", Some(FOUNDER), None)
        .await;
    assert_eq!(pending["total"], 1);
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new();
    let (status, body) = app.call(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn missing_token_is_401() {
    let app = TestApp::new();
    let (status, body) = app.call(Method::GET, "/api/dashboard", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn entrepreneur_cannot_review() {
    let app = TestApp::new();
    let id = app.submit_acme().await;

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/approve", id),
            Some(FOUNDER),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn other_entrepreneur_cannot_view_or_upload() {
    let app = TestApp::new();
    let id = app.submit_acme().await;

    let (status, _) = app
        .call(Method::GET, &format!("/api/pitches/{}", id), Some(OTHER), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .call(
            Method::PUT,
            &format!("/api/pitches/{}/documents/required/id_proof", id),
            Some(OTHER),
            Some(json!({ "document_type": "id", "file_urls": ["f1"] })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn incomplete_documents_is_422_with_pending_slots() {
    let app = TestApp::new();
    let id = app.submit_acme().await;
    app.call(
        Method::PUT,
        &format!("/api/pitches/{}/documents/required/id_proof", id),
        Some(FOUNDER),
        Some(json!({ "document_type": "id", "file_urls": ["f1"] })),
    )
    .await;

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/approve", id),
            Some(ADMIN),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCOMPLETE_DOCUMENTS");
    assert_eq!(body["details"]["pending"], json!(["id_proof"]));
}

#[tokio::test]
async fn second_terminal_review_is_409() {
    let app = TestApp::new();
    let id = app.submit_acme().await;
    let reject = |reason: &'static str| json!({ "reason": reason });

    let (first, _) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/reject", id),
            Some(ADMIN),
            Some(reject("spam")),
        )
        .await;
    let (second, body) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/reject", id),
            Some(ADMIN),
            Some(reject("again")),
        )
        .await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    assert_eq!(app.notifier.sent_count(), 1);
}

#[tokio::test]
async fn blank_rejection_reason_is_400() {
    let app = TestApp::new();
    let id = app.submit_acme().await;

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/admin/pitches/{}/reject", id),
            Some(ADMIN),
            Some(json!({ "reason": "   " })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "rejection_reason");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = TestApp::new();

    let (status, _) = app
        .call(
            Method::GET,
            "/api/pitches/00000000-0000-0000-0000-000000000000",
            Some(FOUNDER),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .call(Method::GET, "/api/pitches/not-a-uuid", Some(FOUNDER), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn storage_outage_is_503() {
    let app = TestApp::new();
    app.store.set_unavailable(true);

    let (status, body) = app.call(Method::GET, "/api/feed", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "STORAGE_FAILURE");
}
