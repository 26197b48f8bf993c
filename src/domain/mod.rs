//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `verification` - Verification request aggregate, document slots and the review engine

pub mod foundation;
pub mod verification;
