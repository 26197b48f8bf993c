//! HTTP adapter for entrepreneur pitch endpoints.
//!
//! - `POST /api/pitches` - Submit a pitch
//! - `GET /api/pitches/mine` - List the caller's pitches
//! - `GET /api/pitches/:id` - View one pitch (owner or admin)
//! - `PUT /api/pitches/:id/documents/:collection/:document_id` - Attach files
//! - `DELETE /api/pitches/:id/documents/:collection/:document_id/files` - Clear a slot
//! - `POST /api/pitches/:id/resubmit` - Answer a clarification request

pub mod dto;
mod handlers;
mod routes;

pub use routes::pitch_routes;
