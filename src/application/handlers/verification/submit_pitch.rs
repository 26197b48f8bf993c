//! SubmitPitchHandler - Command handler for creating verification requests.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserProfileId};
use crate::domain::verification::{
    PersonalInfo, PitchData, VerificationError, VerificationRequest,
};
use crate::ports::VerificationRepository;

/// Command to submit a pitch for verification.
///
/// `personal_info.user_id` is replaced by the caller's id; a caller can
/// only submit on their own behalf.
#[derive(Debug, Clone)]
pub struct SubmitPitchCommand {
    pub personal_info: PersonalInfo,
    pub pitch_data: PitchData,
    pub user_profile_id: Option<UserProfileId>,
}

/// Handler for submitting pitches.
pub struct SubmitPitchHandler {
    repository: Arc<dyn VerificationRepository>,
}

impl SubmitPitchHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPitchCommand,
        metadata: CommandMetadata,
    ) -> Result<VerificationRequest, VerificationError> {
        let personal_info = PersonalInfo {
            user_id: metadata.caller.id.clone(),
            ..cmd.personal_info
        };

        let request =
            VerificationRequest::create(personal_info, cmd.pitch_data, cmd.user_profile_id)?;

        self.repository.insert(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            owner = %request.owner(),
            correlation_id = %metadata.correlation_id(),
            "Pitch submitted for verification"
        );

        Ok(request)
    }
}
