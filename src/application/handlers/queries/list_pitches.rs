//! Status and owner listings of verification requests.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::verification::{VerificationError, VerificationRequest, VerificationStatus};
use crate::ports::{ListOptions, Page, VerificationReader};

use super::paging::{paged, RequestStream};

/// Admin listing of every request in one status, newest first.
#[derive(Debug, Clone)]
pub struct ListByStatusQuery {
    pub status: VerificationStatus,
    pub options: ListOptions,
}

pub struct ListByStatusHandler {
    reader: Arc<dyn VerificationReader>,
}

impl ListByStatusHandler {
    pub fn new(reader: Arc<dyn VerificationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListByStatusQuery,
        caller: &AuthenticatedUser,
    ) -> Result<Page<VerificationRequest>, VerificationError> {
        caller.admin_id()?;
        Ok(self
            .reader
            .list_by_status(query.status, &query.options)
            .await?)
    }

    /// Every request in `status`, fetched lazily page by page. Admin only.
    pub fn stream(
        &self,
        caller: &AuthenticatedUser,
        status: VerificationStatus,
        page_size: u32,
    ) -> Result<RequestStream, VerificationError> {
        caller.admin_id()?;
        let reader = self.reader.clone();
        Ok(paged(page_size, move |options| {
            let reader = reader.clone();
            async move { reader.list_by_status(status, &options).await }
        }))
    }
}

/// An owner's own requests ("my pitches"), optionally filtered by status.
#[derive(Debug, Clone)]
pub struct ListByOwnerQuery {
    pub status: Option<VerificationStatus>,
    pub options: ListOptions,
}

pub struct ListByOwnerHandler {
    reader: Arc<dyn VerificationReader>,
}

impl ListByOwnerHandler {
    pub fn new(reader: Arc<dyn VerificationReader>) -> Self {
        Self { reader }
    }

    /// Lists the caller's own requests.
    pub async fn handle(
        &self,
        query: ListByOwnerQuery,
        caller: &AuthenticatedUser,
    ) -> Result<Page<VerificationRequest>, VerificationError> {
        Ok(self
            .reader
            .list_by_owner(&caller.id, query.status, &query.options)
            .await?)
    }

    /// The caller's own requests, fetched lazily page by page.
    pub fn stream(
        &self,
        caller: &AuthenticatedUser,
        status: Option<VerificationStatus>,
        page_size: u32,
    ) -> Result<RequestStream, VerificationError> {
        let reader = self.reader.clone();
        let owner = caller.id.clone();
        Ok(paged(page_size, move |options| {
            let reader = reader.clone();
            let owner = owner.clone();
            async move { reader.list_by_owner(&owner, status, &options).await }
        }))
    }
}
