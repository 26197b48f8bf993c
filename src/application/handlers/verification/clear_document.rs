//! ClearDocumentHandler - Command handler for emptying a document slot.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, VerificationRequestId};
use crate::domain::verification::{
    DocumentChange, DocumentCollection, DocumentSlot, VerificationError,
};
use crate::ports::VerificationRepository;

/// Command to remove every file from a slot so it can be uploaded afresh.
#[derive(Debug, Clone)]
pub struct ClearDocumentCommand {
    pub request_id: VerificationRequestId,
    pub collection: DocumentCollection,
    pub document_id: String,
}

/// Handler for clearing document slots.
pub struct ClearDocumentHandler {
    repository: Arc<dyn VerificationRepository>,
}

impl ClearDocumentHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ClearDocumentCommand,
        metadata: CommandMetadata,
    ) -> Result<DocumentSlot, VerificationError> {
        let request = self
            .repository
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(VerificationError::NotFound(cmd.request_id))?;
        request.authorize_owner(&metadata.caller)?;

        let change = DocumentChange::Clear {
            collection: cmd.collection,
            document_id: cmd.document_id,
        };
        let slot = self
            .repository
            .apply_document_change(&cmd.request_id, &change)
            .await?;

        tracing::info!(
            request_id = %cmd.request_id,
            collection = %change.collection(),
            document_id = %change.document_id(),
            correlation_id = %metadata.correlation_id(),
            "Document slot cleared"
        );

        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::verification::test_support::{
        acme_for, founder, metadata, store_with,
    };
    use crate::domain::verification::DocumentStatus;

    #[tokio::test]
    async fn clears_files_and_resets_status() {
        let mut request = acme_for(&founder());
        request
            .upsert_document(DocumentCollection::Required, "id_proof", "id", vec!["f1".into()])
            .unwrap();
        request
            .set_document_status(DocumentCollection::Required, "id_proof", DocumentStatus::Rejected)
            .unwrap();
        let store = store_with(&request).await;
        let handler = ClearDocumentHandler::new(store);

        let slot = handler
            .handle(
                ClearDocumentCommand {
                    request_id: *request.id(),
                    collection: DocumentCollection::Required,
                    document_id: "id_proof".to_string(),
                },
                metadata(founder()),
            )
            .await
            .unwrap();

        assert_eq!(slot.file_count(), 0);
        assert_eq!(slot.status(), DocumentStatus::PendingVerification);
    }

    #[tokio::test]
    async fn missing_slot_is_reported() {
        let request = acme_for(&founder());
        let store = store_with(&request).await;
        let handler = ClearDocumentHandler::new(store);

        let result = handler
            .handle(
                ClearDocumentCommand {
                    request_id: *request.id(),
                    collection: DocumentCollection::Optional,
                    document_id: "deck".to_string(),
                },
                metadata(founder()),
            )
            .await;

        assert!(matches!(result, Err(VerificationError::SlotNotFound { .. })));
    }
}
