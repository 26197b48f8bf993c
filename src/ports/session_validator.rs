//! Caller identification port.
//!
//! The auth collaborator owns credentials. Pitch review only hands it the
//! bearer token from a request and gets back who is calling and whether they
//! are an entrepreneur or an admin; review rights follow from that role.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Resolves a bearer token to the calling user.
///
/// Errors:
/// - `InvalidToken`: unknown, malformed or wrongly signed token (401)
/// - `TokenExpired`: well-formed but past its expiry (401)
/// - `ServiceUnavailable`: the collaborator could not answer (503)
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` arrives without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::{Role, UserId};
    use std::sync::Arc;

    #[tokio::test]
    async fn admin_token_resolves_to_reviewer_identity() {
        let reviewer = AuthenticatedUser::new(
            UserId::new("admin-7").unwrap(),
            "review@pitches.test",
            None,
            Role::Admin,
        );
        let validator: Arc<dyn SessionValidator> =
            Arc::new(MockSessionValidator::new().with_user("tok-admin", reviewer));

        let caller = validator.validate("tok-admin").await.unwrap();

        assert_eq!(caller.admin_id().unwrap().as_str(), "admin-7");
        assert_eq!(
            validator.validate("tok-founder").await,
            Err(AuthError::InvalidToken)
        );
    }
}
