//! Shared application state for all HTTP routes.

use std::sync::Arc;

use crate::application::{
    AdminQueueHandler, ApprovedFeedHandler, ClearDocumentHandler, DashboardCountsHandler,
    GetPitchHandler, ListByOwnerHandler, ListByStatusHandler, MyApprovedPitchesHandler,
    ResubmitPitchHandler, ReviewPitchHandler, SetDocumentStatusHandler, SubmitPitchHandler,
    UploadDocumentHandler,
};
use crate::config::ReviewConfig;
use crate::ports::{
    MessageCounter, ReviewNotifier, SessionValidator, VerificationReader, VerificationRepository,
};

/// Ports shared by every request. Cloned per request; all fields are `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn VerificationRepository>,
    pub reader: Arc<dyn VerificationReader>,
    pub messages: Arc<dyn MessageCounter>,
    pub notifier: Arc<dyn ReviewNotifier>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub review: ReviewConfig,
}

impl AppState {
    pub fn submit_pitch_handler(&self) -> SubmitPitchHandler {
        SubmitPitchHandler::new(self.repository.clone())
    }

    pub fn get_pitch_handler(&self) -> GetPitchHandler {
        GetPitchHandler::new(self.repository.clone())
    }

    pub fn upload_document_handler(&self) -> UploadDocumentHandler {
        UploadDocumentHandler::new(self.repository.clone(), self.review.max_files_per_upload)
    }

    pub fn clear_document_handler(&self) -> ClearDocumentHandler {
        ClearDocumentHandler::new(self.repository.clone())
    }

    pub fn set_document_status_handler(&self) -> SetDocumentStatusHandler {
        SetDocumentStatusHandler::new(self.repository.clone())
    }

    pub fn resubmit_pitch_handler(&self) -> ResubmitPitchHandler {
        ResubmitPitchHandler::new(self.repository.clone())
    }

    pub fn review_pitch_handler(&self) -> ReviewPitchHandler {
        ReviewPitchHandler::new(self.repository.clone(), self.notifier.clone())
    }

    pub fn list_by_status_handler(&self) -> ListByStatusHandler {
        ListByStatusHandler::new(self.reader.clone())
    }

    pub fn list_by_owner_handler(&self) -> ListByOwnerHandler {
        ListByOwnerHandler::new(self.reader.clone())
    }

    pub fn admin_queue_handler(&self) -> AdminQueueHandler {
        AdminQueueHandler::new(self.reader.clone())
    }

    pub fn approved_feed_handler(&self) -> ApprovedFeedHandler {
        ApprovedFeedHandler::new(self.reader.clone())
    }

    pub fn my_approved_pitches_handler(&self) -> MyApprovedPitchesHandler {
        MyApprovedPitchesHandler::new(self.reader.clone())
    }

    pub fn dashboard_counts_handler(&self) -> DashboardCountsHandler {
        DashboardCountsHandler::new(self.reader.clone(), self.messages.clone())
    }
}
