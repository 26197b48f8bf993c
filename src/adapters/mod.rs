//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Session token validation (JWT, mock)
//! - `http` - axum REST API
//! - `memory` - In-process stores for tests and local runs
//! - `notification` - Review notification delivery
//! - `postgres` - sqlx-backed persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod notification;
pub mod postgres;
