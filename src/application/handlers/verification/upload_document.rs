//! UploadDocumentHandler - Command handler for attaching files to a slot.
//!
//! Files are stored by the file storage collaborator first; this handler
//! only records the returned URLs.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ValidationError, VerificationRequestId};
use crate::domain::verification::{
    DocumentChange, DocumentCollection, DocumentSlot, VerificationError,
};
use crate::ports::VerificationRepository;

/// Command to append file URLs to a document slot.
#[derive(Debug, Clone)]
pub struct UploadDocumentCommand {
    pub request_id: VerificationRequestId,
    pub collection: DocumentCollection,
    pub document_id: String,
    pub document_type: String,
    pub file_urls: Vec<String>,
}

/// Handler for document uploads.
pub struct UploadDocumentHandler {
    repository: Arc<dyn VerificationRepository>,
    max_files_per_upload: usize,
}

impl UploadDocumentHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>, max_files_per_upload: usize) -> Self {
        Self {
            repository,
            max_files_per_upload,
        }
    }

    pub async fn handle(
        &self,
        cmd: UploadDocumentCommand,
        metadata: CommandMetadata,
    ) -> Result<DocumentSlot, VerificationError> {
        if cmd.file_urls.is_empty() {
            return Err(ValidationError::empty_field("file_urls").into());
        }
        if cmd.file_urls.len() > self.max_files_per_upload {
            return Err(ValidationError::out_of_range(
                "file_urls",
                1,
                i32::try_from(self.max_files_per_upload).unwrap_or(i32::MAX),
                i32::try_from(cmd.file_urls.len()).unwrap_or(i32::MAX),
            )
            .into());
        }

        // Ownership never changes, so checking it before the atomic write is safe.
        let request = self
            .repository
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(VerificationError::NotFound(cmd.request_id))?;
        request.authorize_owner(&metadata.caller)?;

        let change = DocumentChange::Upsert {
            collection: cmd.collection,
            document_id: cmd.document_id,
            document_type: cmd.document_type,
            file_urls: cmd.file_urls,
        };
        let slot = self
            .repository
            .apply_document_change(&cmd.request_id, &change)
            .await?;

        tracing::info!(
            request_id = %cmd.request_id,
            collection = %change.collection(),
            document_id = %slot.document_id(),
            file_count = slot.file_count(),
            correlation_id = %metadata.correlation_id(),
            "Document files attached"
        );

        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::verification::test_support::{
        acme_for, admin, founder, metadata, store_with,
    };
    use crate::domain::foundation::{AdminId, Timestamp};
    use crate::domain::verification::{DocumentStatus, ReviewDecision};

    fn upload(request_id: VerificationRequestId, urls: &[&str]) -> UploadDocumentCommand {
        UploadDocumentCommand {
            request_id,
            collection: DocumentCollection::Required,
            document_id: "id_proof".to_string(),
            document_type: "government_id".to_string(),
            file_urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn owner_upload_creates_pending_slot() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 10);

        let slot = handler
            .handle(upload(*request.id(), &["f1"]), metadata(founder()))
            .await
            .unwrap();

        assert_eq!(slot.file_count(), 1);
        assert_eq!(slot.status(), DocumentStatus::PendingVerification);
    }

    #[tokio::test]
    async fn second_upload_appends() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 10);

        handler
            .handle(upload(*request.id(), &["f1"]), metadata(founder()))
            .await
            .unwrap();
        let slot = handler
            .handle(upload(*request.id(), &["f2", "f3"]), metadata(founder()))
            .await
            .unwrap();

        assert_eq!(slot.file_urls(), &["f1", "f2", "f3"]);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 10);

        let result = handler
            .handle(upload(*request.id(), &["f1"]), metadata(admin()))
            .await;

        assert_eq!(result, Err(VerificationError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 10);
        let missing = VerificationRequestId::new();

        let result = handler
            .handle(upload(missing, &["f1"]), metadata(founder()))
            .await;

        assert_eq!(result, Err(VerificationError::NotFound(missing)));
    }

    #[tokio::test]
    async fn empty_and_oversized_uploads_are_rejected() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 2);

        let empty = handler
            .handle(upload(*request.id(), &[]), metadata(founder()))
            .await;
        assert!(matches!(empty, Err(VerificationError::Validation(_))));

        let too_many = handler
            .handle(upload(*request.id(), &["a", "b", "c"]), metadata(founder()))
            .await;
        assert!(matches!(too_many, Err(VerificationError::Validation(_))));
    }

    #[tokio::test]
    async fn upload_after_approval_is_invalid_transition() {
        let mut request = acme_for(&founder());
        request
            .apply_review(
                ReviewDecision::Approve,
                AdminId::new("admin-1").unwrap(),
                Timestamp::now(),
            )
            .unwrap();
        let store = store_with(&request).await;
        let handler = UploadDocumentHandler::new(store, 10);

        let result = handler
            .handle(upload(*request.id(), &["f1"]), metadata(founder()))
            .await;

        assert!(matches!(
            result,
            Err(VerificationError::InvalidTransition { .. })
        ));
    }
}
