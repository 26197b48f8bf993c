//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries the caller and tracing context through command
//! processing instead of threading loose `user_id` / `correlation_id`
//! parameters through every handler.

use uuid::Uuid;

use super::AuthenticatedUser;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    /// The caller executing this command.
    pub caller: AuthenticatedUser,

    /// Links related operations across a single user request.
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "test").
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for a caller.
    pub fn new(caller: AuthenticatedUser) -> Self {
        Self {
            caller,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    fn caller() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-1").unwrap(), "u@x.io", None, Role::Admin)
    }

    #[test]
    fn builder_sets_correlation_and_source() {
        let metadata = CommandMetadata::new(caller())
            .with_correlation_id("corr-123")
            .with_source("api");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(caller());
        assert!(!metadata.correlation_id().is_empty());
        assert!(metadata.source().is_none());
    }
}
