//! Public feed of approved pitches.

use std::sync::Arc;

use futures::StreamExt;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::verification::{VerificationError, VerificationStatus};
use crate::ports::{ListOptions, Page, PitchSummary, VerificationReader};

use super::paging::paged;

/// Every approved request, newest first. Requires no caller.
pub struct ApprovedFeedHandler {
    reader: Arc<dyn VerificationReader>,
}

impl ApprovedFeedHandler {
    pub fn new(reader: Arc<dyn VerificationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        options: ListOptions,
    ) -> Result<Page<PitchSummary>, VerificationError> {
        let page = self
            .reader
            .list_by_status(VerificationStatus::Approved, &options)
            .await?;
        Ok(page.map(|request| PitchSummary::from(&request)))
    }

    /// The whole feed as a lazy stream of summaries.
    pub fn stream(
        &self,
        page_size: u32,
    ) -> impl futures::Stream<Item = Result<PitchSummary, VerificationError>> + Send {
        let reader = self.reader.clone();
        paged(page_size, move |options| {
            let reader = reader.clone();
            async move {
                reader
                    .list_by_status(VerificationStatus::Approved, &options)
                    .await
            }
        })
        .map(|item| item.map(|request| PitchSummary::from(&request)))
    }
}

/// The caller's own approved pitches.
pub struct MyApprovedPitchesHandler {
    reader: Arc<dyn VerificationReader>,
}

impl MyApprovedPitchesHandler {
    pub fn new(reader: Arc<dyn VerificationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        caller: &AuthenticatedUser,
        options: ListOptions,
    ) -> Result<Page<PitchSummary>, VerificationError> {
        let page = self
            .reader
            .list_by_owner(&caller.id, Some(VerificationStatus::Approved), &options)
            .await?;
        Ok(page.map(|request| PitchSummary::from(&request)))
    }
}
