//! Path and header parsing shared by the endpoint modules.

use http::HeaderMap;

use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, ValidationError, VerificationRequestId,
};
use crate::domain::verification::{DocumentCollection, DocumentStatus, VerificationStatus};

/// Header carrying the caller's correlation id, if any.
pub const CORRELATION_HEADER: &str = "x-request-id";

pub fn request_id(raw: &str) -> Result<VerificationRequestId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::invalid_format("id", "not a valid request id"))
}

pub fn collection(raw: &str) -> Result<DocumentCollection, ValidationError> {
    raw.parse()
}

pub fn verification_status(raw: Option<&str>) -> Result<Option<VerificationStatus>, ValidationError> {
    raw.map(str::parse).transpose()
}

pub fn document_status(raw: &str) -> Result<DocumentStatus, ValidationError> {
    raw.parse()
}

/// Command metadata for an API call, reusing the client's correlation id.
pub fn metadata(caller: AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(caller).with_source("api");
    match headers.get(CORRELATION_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) if !id.is_empty() => metadata.with_correlation_id(id),
        _ => metadata,
    }
}
