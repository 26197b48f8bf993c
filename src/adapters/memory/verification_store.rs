//! In-memory verification store.
//!
//! Implements both `VerificationRepository` and `VerificationReader` over a
//! single map guarded by one async lock, so every mutation is one atomic
//! read-modify-write and readers never see a half-applied change.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{UserId, VerificationRequestId};
use crate::domain::verification::{
    DocumentChange, DocumentSlot, VerificationRequest, VerificationStatus,
};
use crate::ports::{
    ListOptions, OwnerCounts, Page, RepositoryError, VerificationReader, VerificationRepository,
};

/// Map-backed store for verification requests.
#[derive(Debug, Default)]
pub struct InMemoryVerificationStore {
    requests: RwLock<HashMap<VerificationRequestId, VerificationRequest>>,
    unavailable: AtomicBool,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a database error until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored requests.
    pub async fn len(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.requests.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RepositoryError::database("store unavailable"))
        } else {
            Ok(())
        }
    }

    async fn page_where<F>(
        &self,
        options: &ListOptions,
        predicate: F,
    ) -> Result<Page<VerificationRequest>, RepositoryError>
    where
        F: Fn(&VerificationRequest) -> bool + Send,
    {
        self.check_available()?;
        let requests = self.requests.read().await;

        let mut matching: Vec<&VerificationRequest> = requests
            .values()
            .filter(|r| predicate(r))
            .filter(|r| options.after.map_or(true, |cursor| cursor.precedes(r)))
            .collect();
        matching.sort_by(|a, b| {
            b.submitted_at()
                .cmp(a.submitted_at())
                .then_with(|| b.id().as_uuid().cmp(a.id().as_uuid()))
        });

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(options.effective_offset() as usize)
            .take(options.effective_limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, total, options))
    }
}

#[async_trait]
impl VerificationRepository for InMemoryVerificationStore {
    async fn insert(&self, request: &VerificationRequest) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut requests = self.requests.write().await;
        if requests.contains_key(request.id()) {
            return Err(RepositoryError::database(format!(
                "duplicate verification request id: {}",
                request.id()
            )));
        }
        requests.insert(*request.id(), request.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        self.check_available()?;
        Ok(self.requests.read().await.get(id).cloned())
    }

    async fn update(
        &self,
        request: &VerificationRequest,
        expected_version: u64,
    ) -> Result<u64, RepositoryError> {
        self.check_available()?;
        let mut requests = self.requests.write().await;
        let stored = requests
            .get_mut(request.id())
            .ok_or(RepositoryError::NotFound(*request.id()))?;

        if stored.version() != expected_version {
            return Err(RepositoryError::Conflict {
                id: *request.id(),
                expected: expected_version,
            });
        }

        let next_version = expected_version + 1;
        let mut committed = request.clone();
        committed.set_version(next_version);
        *stored = committed;
        Ok(next_version)
    }

    async fn apply_document_change(
        &self,
        id: &VerificationRequestId,
        change: &DocumentChange,
    ) -> Result<DocumentSlot, RepositoryError> {
        self.check_available()?;
        let mut requests = self.requests.write().await;
        let stored = requests.get_mut(id).ok_or(RepositoryError::NotFound(*id))?;

        let mut working = stored.clone();
        let slot = change.apply(&mut working)?;
        working.set_version(stored.version() + 1);
        *stored = working;
        Ok(slot)
    }
}

#[async_trait]
impl VerificationReader for InMemoryVerificationStore {
    async fn list_by_status(
        &self,
        status: VerificationStatus,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError> {
        self.page_where(options, |r| r.status() == status).await
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        status: Option<VerificationStatus>,
        options: &ListOptions,
    ) -> Result<Page<VerificationRequest>, RepositoryError> {
        self.page_where(options, |r| {
            r.is_owner(owner) && status.map_or(true, |s| r.status() == s)
        })
        .await
    }

    async fn count_by_owner(&self, owner: &UserId) -> Result<OwnerCounts, RepositoryError> {
        self.check_available()?;
        let requests = self.requests.read().await;
        let owned = requests.values().filter(|r| r.is_owner(owner));

        let mut counts = OwnerCounts::default();
        for request in owned {
            counts.submitted += 1;
            if request.status() == VerificationStatus::Approved {
                counts.approved += 1;
            }
        }
        Ok(counts)
    }
}
