//! Admin review worklist: pending requests, newest first.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::verification::{VerificationError, VerificationRequest, VerificationStatus};
use crate::ports::{ListOptions, Page, VerificationReader};

pub struct AdminQueueHandler {
    reader: Arc<dyn VerificationReader>,
}

impl AdminQueueHandler {
    pub fn new(reader: Arc<dyn VerificationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        caller: &AuthenticatedUser,
        options: ListOptions,
    ) -> Result<Page<VerificationRequest>, VerificationError> {
        caller.admin_id()?;
        Ok(self
            .reader
            .list_by_status(VerificationStatus::Pending, &options)
            .await?)
    }
}
