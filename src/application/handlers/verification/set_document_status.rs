//! SetDocumentStatusHandler - Admin command for verifying a single slot.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, VerificationRequestId};
use crate::domain::verification::{
    DocumentChange, DocumentCollection, DocumentSlot, DocumentStatus, VerificationError,
};
use crate::ports::VerificationRepository;

/// Command to mark one document slot approved, rejected, or pending.
#[derive(Debug, Clone)]
pub struct SetDocumentStatusCommand {
    pub request_id: VerificationRequestId,
    pub collection: DocumentCollection,
    pub document_id: String,
    pub status: DocumentStatus,
}

/// Handler for slot verification. Admin only.
pub struct SetDocumentStatusHandler {
    repository: Arc<dyn VerificationRepository>,
}

impl SetDocumentStatusHandler {
    pub fn new(repository: Arc<dyn VerificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SetDocumentStatusCommand,
        metadata: CommandMetadata,
    ) -> Result<DocumentSlot, VerificationError> {
        let admin = metadata.caller.admin_id()?;

        let change = DocumentChange::SetStatus {
            collection: cmd.collection,
            document_id: cmd.document_id,
            status: cmd.status,
        };
        let slot = self
            .repository
            .apply_document_change(&cmd.request_id, &change)
            .await?;

        tracing::info!(
            request_id = %cmd.request_id,
            collection = %change.collection(),
            document_id = %slot.document_id(),
            status = %slot.status(),
            admin = %admin,
            correlation_id = %metadata.correlation_id(),
            "Document slot status set"
        );

        Ok(slot)
    }
}
