//! GetPitchHandler - Query handler for a single verification request.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, VerificationRequestId};
use crate::domain::verification::{VerificationError, VerificationRequest};
use crate::ports::VerificationRepository;

/// Query for one request. Visible to its owner and to admins.
#[derive(Debug, Clone)]
pub struct GetPitchQuery {
    pub request_id: VerificationRequestId,
}

pub struct GetPitchHandler {
    repository: Arc<dyn VerificationRepository>,
}

impl GetPitchHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetPitchQuery,
        caller: &AuthenticatedUser,
    ) -> Result<VerificationRequest, VerificationError> {
        let request = self
            .repository
            .find_by_id(&query.request_id)
            .await?
            .ok_or(VerificationError::NotFound(query.request_id))?;

        request.authorize_view(caller)?;
        Ok(request)
    }
}
