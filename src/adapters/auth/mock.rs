//! Mock session validator for testing.
//!
//! Maps fixed bearer tokens to callers so HTTP tests can act as an
//! entrepreneur or an admin without a real token issuer.
//!
//! # Example
//!
//! ```ignore
//! use pitch_review::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new()
//!     .with_entrepreneur("founder-token", "founder-1")
//!     .with_admin("admin-token", "admin-1");
//!
//! let caller = validator.validate("admin-token").await?;
//! assert!(caller.is_admin());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::SessionValidator;

/// Mock session validator.
///
/// Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation while set.
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a token for an entrepreneur with the given id.
    pub fn with_entrepreneur(self, token: impl Into<String>, user_id: &str) -> Self {
        self.with_role(token, user_id, Role::Entrepreneur)
    }

    /// Adds a token for an admin with the given id.
    pub fn with_admin(self, token: impl Into<String>, user_id: &str) -> Self {
        self.with_role(token, user_id, Role::Admin)
    }

    fn with_role(self, token: impl Into<String>, user_id: &str, role: Role) -> Self {
        match UserId::new(user_id) {
            Ok(id) => {
                let user = AuthenticatedUser::new(
                    id,
                    format!("{}@test.example.com", user_id),
                    Some(format!("Test User {}", user_id)),
                    role,
                );
                self.with_user(token, user)
            }
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_user_for_registered_token() {
        let validator = MockSessionValidator::new().with_entrepreneur("tok", "founder-1");

        let user = validator.validate("tok").await.unwrap();

        assert_eq!(user.id.as_str(), "founder-1");
        assert_eq!(user.role, Role::Entrepreneur);
    }

    #[tokio::test]
    async fn admin_tokens_carry_admin_role() {
        let validator = MockSessionValidator::new().with_admin("tok", "admin-1");
        let user = validator.validate("tok").await.unwrap();
        assert!(user.is_admin());
        assert_eq!(user.admin_id().unwrap().as_str(), "admin-1");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let validator = MockSessionValidator::new();
        assert_eq!(validator.validate("nope").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let validator = MockSessionValidator::new()
            .with_admin("tok", "admin-1")
            .with_error(AuthError::TokenExpired);
        assert_eq!(validator.validate("tok").await, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn removed_token_is_invalid() {
        let validator = MockSessionValidator::new().with_admin("tok", "admin-1");
        validator.remove_token("tok");
        assert!(validator.validate("tok").await.is_err());
    }
}
