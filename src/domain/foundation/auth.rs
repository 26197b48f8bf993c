//! Authentication types for the domain layer.
//!
//! These types represent the caller identity handed to the core by the auth
//! collaborator. The core trusts this identity and does not re-verify
//! credentials; any token provider can populate them via the
//! `SessionValidator` port.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{AdminId, UserId};

/// Role of the calling user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Submits and manages their own pitches.
    #[default]
    Entrepreneur,
    /// Reviews pitches and documents.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Entrepreneur => "entrepreneur",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// Authenticated caller extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,

    /// Role granted by the auth provider.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            role,
        }
    }

    /// Returns true if the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the caller into a reviewer identity.
    ///
    /// # Errors
    ///
    /// - `InsufficientPermissions` if the caller is not an admin
    pub fn admin_id(&self) -> Result<AdminId, AuthError> {
        if !self.is_admin() {
            return Err(AuthError::InsufficientPermissions);
        }
        AdminId::new(self.id.as_str()).map_err(|_| AuthError::InvalidToken)
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Caller is authenticated but lacks the required role.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// The authentication service is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
