//! Feed and dashboard HTTP adapter module.
//!
//! - `GET /api/feed` - Approved pitches, newest first (public)
//! - `GET /api/dashboard` - Submitted, approved and unread message counts
//! - `GET /api/dashboard/approved` - The caller's approved pitches

pub mod dto;
mod handlers;
mod routes;

pub use dto::DashboardResponse;
pub use routes::dashboard_routes;
