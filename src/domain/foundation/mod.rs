//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine trait
//! that form the vocabulary of the pitch review domain.

mod auth;
mod command;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use command::CommandMetadata;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{AdminId, UserId, UserProfileId, VerificationRequestId, ANONYMOUS_USER_PREFIX};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
