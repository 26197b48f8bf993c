//! Pitch Review - verification workflow for entrepreneur pitch submissions.
//!
//! Entrepreneurs submit a pitch and attach supporting documents; admins
//! verify each document and approve, reject, or ask for clarification.
//! Approved pitches feed the public listing and per-user dashboards.
//!
//! Layout follows ports and adapters: `domain` holds the aggregate and its
//! state machine, `ports` the collaborator traits, `application` the
//! command and query handlers, and `adapters` the HTTP, Postgres and
//! in-memory implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
