//! VerificationRequest aggregate.
//!
//! One submitted pitch: personal info, pitch content, the document set and
//! the top-level review status, kept together as one consistency boundary.
//!
//! # Ownership
//!
//! `user_profile_id` references the submitting profile but the profile does
//! not own the request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AdminId, AuthenticatedUser, StateMachine, Timestamp, UserId, UserProfileId, ValidationError,
    VerificationRequestId,
};

use super::{
    DocumentCollection, DocumentSet, DocumentSlot, DocumentStatus, VerificationError,
    VerificationStatus,
};

/// Submitter contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub business_name: Option<String>,
    pub email: String,
    pub contact_number: Option<String>,
    pub business_registration_number: Option<String>,
    pub industry_type: Option<String>,
    pub country: Option<String>,
}

impl PersonalInfo {
    /// Creates personal info with only the required email.
    ///
    /// A missing `user_id` is replaced by a generated anonymous id.
    pub fn new(user_id: Option<UserId>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.unwrap_or_else(UserId::generate_anonymous),
            full_name: None,
            business_name: None,
            email: email.into(),
            contact_number: None,
            business_registration_number: None,
            industry_type: None,
            country: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_business_name(mut self, business_name: impl Into<String>) -> Self {
        self.business_name = Some(business_name.into());
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(())
    }
}

/// Pitch content shown to reviewers and, once approved, in the public feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchData {
    pub video_url: String,
    pub startup_name: String,
    #[serde(default)]
    pub one_liner: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub is_public: bool,
}

impl PitchData {
    /// Creates pitch data with the two required fields.
    pub fn new(video_url: impl Into<String>, startup_name: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            startup_name: startup_name.into(),
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.video_url.trim().is_empty() {
            return Err(ValidationError::empty_field("video_url"));
        }
        if self.startup_name.trim().is_empty() {
            return Err(ValidationError::empty_field("startup_name"));
        }
        Ok(())
    }
}

/// Who reviewed the request last, and when.
///
/// Held as one optional value so the two fields can never diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub reviewed_at: Timestamp,
    pub reviewed_by: AdminId,
}

/// Verification request aggregate.
///
/// # Invariants
///
/// - `status` starts `Pending` and only changes through the review engine
/// - `rejection_reason` is set if and only if `status == Rejected`
/// - `review` is `None` until the first admin transition
/// - `version` increases by one with every committed mutation
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub(super) id: VerificationRequestId,
    pub(super) personal_info: PersonalInfo,
    pub(super) pitch_data: PitchData,
    pub(super) documents: DocumentSet,
    pub(super) status: VerificationStatus,
    pub(super) rejection_reason: Option<String>,
    pub(super) submitted_at: Timestamp,
    pub(super) review: Option<Review>,
    pub(super) user_profile_id: Option<UserProfileId>,
    pub(super) score: Option<f64>,
    pub(super) version: u64,
}

impl VerificationRequest {
    /// Creates a new pending request.
    ///
    /// # Errors
    ///
    /// - `Validation` if `video_url`, `startup_name`, or `email` is missing
    pub fn create(
        personal_info: PersonalInfo,
        pitch_data: PitchData,
        user_profile_id: Option<UserProfileId>,
    ) -> Result<Self, VerificationError> {
        pitch_data.validate()?;
        personal_info.validate()?;

        Ok(Self {
            id: VerificationRequestId::new(),
            personal_info,
            pitch_data,
            documents: DocumentSet::new(),
            status: VerificationStatus::Pending,
            rejection_reason: None,
            submitted_at: Timestamp::now(),
            review: None,
            user_profile_id,
            score: None,
            version: 0,
        })
    }

    /// Reconstitute a request from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: VerificationRequestId,
        personal_info: PersonalInfo,
        pitch_data: PitchData,
        documents: DocumentSet,
        status: VerificationStatus,
        rejection_reason: Option<String>,
        submitted_at: Timestamp,
        review: Option<Review>,
        user_profile_id: Option<UserProfileId>,
        score: Option<f64>,
        version: u64,
    ) -> Self {
        Self {
            id,
            personal_info,
            pitch_data,
            documents,
            status,
            rejection_reason,
            submitted_at,
            review,
            user_profile_id,
            score,
            version,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &VerificationRequestId {
        &self.id
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn pitch_data(&self) -> &PitchData {
        &self.pitch_data
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    pub fn review(&self) -> Option<&Review> {
        self.review.as_ref()
    }

    pub fn reviewed_at(&self) -> Option<&Timestamp> {
        self.review.as_ref().map(|r| &r.reviewed_at)
    }

    pub fn reviewed_by(&self) -> Option<&AdminId> {
        self.review.as_ref().map(|r| &r.reviewed_by)
    }

    pub fn user_profile_id(&self) -> Option<&UserProfileId> {
        self.user_profile_id.as_ref()
    }

    /// Externally computed score, passed through untouched.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Owner of the request.
    pub fn owner(&self) -> &UserId {
        &self.personal_info.user_id
    }

    /// Persistence revision this value was read at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Records the revision assigned by the store on commit.
    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner() == user_id
    }

    /// Owners and admins may read a request.
    pub fn authorize_view(&self, caller: &AuthenticatedUser) -> Result<(), VerificationError> {
        if caller.is_admin() || self.is_owner(&caller.id) {
            Ok(())
        } else {
            Err(VerificationError::Forbidden)
        }
    }

    /// Only the owner may change pitch content and documents.
    pub fn authorize_owner(&self, caller: &AuthenticatedUser) -> Result<(), VerificationError> {
        if self.is_owner(&caller.id) {
            Ok(())
        } else {
            Err(VerificationError::Forbidden)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Document mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends files to a document slot, creating it when missing.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` once the request is approved or rejected
    /// - `Validation` for blank ids or URLs
    pub fn upsert_document(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
        document_type: &str,
        file_urls: Vec<String>,
    ) -> Result<DocumentSlot, VerificationError> {
        self.ensure_documents_open("upload documents to")?;
        self.documents
            .upsert_slot(collection, document_id, document_type, file_urls)
    }

    /// Clears a slot's files.
    pub fn clear_document(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
    ) -> Result<DocumentSlot, VerificationError> {
        self.ensure_documents_open("clear documents of")?;
        self.documents.clear_slot(collection, document_id)
    }

    /// Sets one slot's verification status. Does not cascade.
    pub fn set_document_status(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
        status: DocumentStatus,
    ) -> Result<DocumentSlot, VerificationError> {
        self.ensure_documents_open("verify documents of")?;
        self.documents.set_slot_status(collection, document_id, status)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submitter transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns a request awaiting clarification to the admin queue.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the request needs clarification
    pub fn resubmit(&mut self) -> Result<(), VerificationError> {
        if self.status != VerificationStatus::NeedsClarification
            || !self.status.can_transition_to(&VerificationStatus::Pending)
        {
            return Err(VerificationError::invalid_transition(self.status, "resubmit"));
        }
        self.status = VerificationStatus::Pending;
        self.rejection_reason = None;
        Ok(())
    }

    fn ensure_documents_open(&self, action: &str) -> Result<(), VerificationError> {
        if self.status.accepts_documents() {
            Ok(())
        } else {
            Err(VerificationError::invalid_transition(self.status, action))
        }
    }
}

/// A single document-slot mutation, applied by the store under its own
/// atomic read-modify-write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentChange {
    Upsert {
        collection: DocumentCollection,
        document_id: String,
        document_type: String,
        file_urls: Vec<String>,
    },
    Clear {
        collection: DocumentCollection,
        document_id: String,
    },
    SetStatus {
        collection: DocumentCollection,
        document_id: String,
        status: DocumentStatus,
    },
}

impl DocumentChange {
    /// Applies the change to a freshly read request.
    pub fn apply(&self, request: &mut VerificationRequest) -> Result<DocumentSlot, VerificationError> {
        match self {
            DocumentChange::Upsert {
                collection,
                document_id,
                document_type,
                file_urls,
            } => request.upsert_document(*collection, document_id, document_type, file_urls.clone()),
            DocumentChange::Clear {
                collection,
                document_id,
            } => request.clear_document(*collection, document_id),
            DocumentChange::SetStatus {
                collection,
                document_id,
                status,
            } => request.set_document_status(*collection, document_id, *status),
        }
    }

    pub fn collection(&self) -> DocumentCollection {
        match self {
            DocumentChange::Upsert { collection, .. }
            | DocumentChange::Clear { collection, .. }
            | DocumentChange::SetStatus { collection, .. } => *collection,
        }
    }

    pub fn document_id(&self) -> &str {
        match self {
            DocumentChange::Upsert { document_id, .. }
            | DocumentChange::Clear { document_id, .. }
            | DocumentChange::SetStatus { document_id, .. } => document_id,
        }
    }
}
