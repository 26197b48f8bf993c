//! HTTP adapter for admin review endpoints.
//!
//! - `GET /api/admin/queue` - Pending requests, newest first
//! - `GET /api/admin/pitches?status=` - Requests in any status
//! - `PUT /api/admin/pitches/:id/documents/:collection/:document_id/status` - Document verdict
//! - `POST /api/admin/pitches/:id/approve`
//! - `POST /api/admin/pitches/:id/reject`
//! - `POST /api/admin/pitches/:id/request-clarification`

mod handlers;
mod routes;

pub use handlers::ReviewResponse;
pub use routes::admin_routes;
