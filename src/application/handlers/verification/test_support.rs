//! Shared fixtures for handler tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::InMemoryVerificationStore;
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, Role, UserId, VerificationRequestId,
};
use crate::domain::verification::{
    DocumentChange, DocumentSlot, PersonalInfo, PitchData, VerificationRequest,
};
use crate::ports::{RepositoryError, VerificationRepository};

pub fn caller(id: &str, role: Role) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
}

pub fn founder() -> AuthenticatedUser {
    caller("founder-1", Role::Entrepreneur)
}

pub fn admin() -> AuthenticatedUser {
    caller("admin-1", Role::Admin)
}

pub fn metadata(user: AuthenticatedUser) -> CommandMetadata {
    CommandMetadata::new(user).with_source("test")
}

pub fn acme_for(owner: &AuthenticatedUser) -> VerificationRequest {
    VerificationRequest::create(
        PersonalInfo::new(Some(owner.id.clone()), "a@b.com"),
        PitchData::new("v1", "Acme"),
        None,
    )
    .unwrap()
}

pub async fn store_with(request: &VerificationRequest) -> Arc<InMemoryVerificationStore> {
    let store = Arc::new(InMemoryVerificationStore::new());
    store.insert(request).await.unwrap();
    store
}

/// Wraps a store and reports a version conflict on the first `n` updates,
/// after letting a competing write land.
pub struct ConflictingRepository {
    pub inner: Arc<InMemoryVerificationStore>,
    conflicts_left: AtomicU32,
    competing: Option<VerificationRequest>,
}

impl ConflictingRepository {
    pub fn new(inner: Arc<InMemoryVerificationStore>, conflicts: u32) -> Self {
        Self {
            inner,
            conflicts_left: AtomicU32::new(conflicts),
            competing: None,
        }
    }

    /// Commits `competing` just before the first injected conflict.
    pub fn with_competing_write(mut self, competing: VerificationRequest) -> Self {
        self.competing = Some(competing);
        self
    }
}

#[async_trait]
impl VerificationRepository for ConflictingRepository {
    async fn insert(&self, request: &VerificationRequest) -> Result<(), RepositoryError> {
        self.inner.insert(request).await
    }

    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn update(
        &self,
        request: &VerificationRequest,
        expected_version: u64,
    ) -> Result<u64, RepositoryError> {
        let left = self.conflicts_left.load(Ordering::SeqCst);
        if left > 0 {
            self.conflicts_left.store(left - 1, Ordering::SeqCst);
            if let Some(competing) = &self.competing {
                let current = self.inner.find_by_id(request.id()).await?;
                if let Some(current) = current {
                    self.inner.update(competing, current.version()).await?;
                }
            }
            return Err(RepositoryError::Conflict {
                id: *request.id(),
                expected: expected_version,
            });
        }
        self.inner.update(request, expected_version).await
    }

    async fn apply_document_change(
        &self,
        id: &VerificationRequestId,
        change: &DocumentChange,
    ) -> Result<DocumentSlot, RepositoryError> {
        self.inner.apply_document_change(id, change).await
    }
}
