//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a verification request (one submitted pitch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationRequestId(Uuid);

impl VerificationRequestId {
    /// Creates a new random VerificationRequestId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a VerificationRequestId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VerificationRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VerificationRequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of the profile that submitted a pitch.
///
/// Relation only: the profile does not own the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfileId(Uuid);

impl UserProfileId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// User identifier (typically from auth provider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Prefix for user ids generated for anonymous or partial submissions.
pub const ANONYMOUS_USER_PREFIX: &str = "anon-";

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Generates a unique placeholder id for submissions that arrive
    /// without an owner.
    ///
    /// This is a grouping token, not a credential.
    pub fn generate_anonymous() -> Self {
        Self(format!("{}{}", ANONYMOUS_USER_PREFIX, Uuid::new_v4().simple()))
    }

    /// Returns true if this id was produced by [`UserId::generate_anonymous`].
    pub fn is_anonymous(&self) -> bool {
        self.0.starts_with(ANONYMOUS_USER_PREFIX)
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the administrator who performed a review transition.
///
/// Only constructed from an authenticated admin (see
/// [`AuthenticatedUser::admin_id`](super::AuthenticatedUser::admin_id)) or
/// when reconstituting persisted records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(String);

impl AdminId {
    /// Creates a new AdminId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("admin_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_request_id_generates_unique_values() {
        let a = VerificationRequestId::new();
        let b = VerificationRequestId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn verification_request_id_parses_from_string() {
        let id = VerificationRequestId::new();
        let parsed: VerificationRequestId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn verification_request_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<VerificationRequestId>().is_err());
    }

    #[test]
    fn user_id_rejects_empty() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn anonymous_user_ids_are_unique_and_tagged() {
        let a = UserId::generate_anonymous();
        let b = UserId::generate_anonymous();
        assert_ne!(a, b);
        assert!(a.is_anonymous());
        assert!(!UserId::new("user-1").unwrap().is_anonymous());
    }

    #[test]
    fn admin_id_rejects_empty() {
        assert!(AdminId::new("").is_err());
        assert_eq!(AdminId::new("admin-7").unwrap().as_str(), "admin-7");
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::new("user-42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-42\"");
    }
}
