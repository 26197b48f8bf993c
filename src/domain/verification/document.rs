//! Document set: required and optional document slots.
//!
//! Slots are embedded in their verification request and have no identity
//! outside it. A slot's file count is always derived from its file list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{DocumentStatus, VerificationError};

/// Which collection of the document set a slot lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCollection {
    Required,
    Optional,
}

impl DocumentCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCollection::Required => "required",
            DocumentCollection::Optional => "optional",
        }
    }
}

impl fmt::Display for DocumentCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentCollection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(DocumentCollection::Required),
            "optional" => Ok(DocumentCollection::Optional),
            other => Err(ValidationError::invalid_format(
                "collection",
                format!("must be 'required' or 'optional', got '{}'", other),
            )),
        }
    }
}

/// One named document requirement or optional attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSlot {
    document_id: String,
    document_type: String,
    file_urls: Vec<String>,
    status: DocumentStatus,
}

impl DocumentSlot {
    fn new(document_id: String, document_type: String, file_urls: Vec<String>) -> Self {
        Self {
            document_id,
            document_type,
            file_urls,
            status: DocumentStatus::PendingVerification,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    pub fn file_urls(&self) -> &[String] {
        &self.file_urls
    }

    /// Number of stored files. Always equal to `file_urls().len()`.
    pub fn file_count(&self) -> usize {
        self.file_urls.len()
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn is_approved(&self) -> bool {
        self.status == DocumentStatus::Approved
    }
}

/// Required and optional document slots of one verification request.
///
/// # Invariants
///
/// - `document_id` is unique within each collection (not across them)
/// - file counts are derived, never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    #[serde(default)]
    required: Vec<DocumentSlot>,
    #[serde(default)]
    optional: Vec<DocumentSlot>,
}

impl DocumentSet {
    /// Creates an empty document set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&self) -> &[DocumentSlot] {
        &self.required
    }

    pub fn optional(&self) -> &[DocumentSlot] {
        &self.optional
    }

    pub fn collection(&self, collection: DocumentCollection) -> &[DocumentSlot] {
        match collection {
            DocumentCollection::Required => &self.required,
            DocumentCollection::Optional => &self.optional,
        }
    }

    /// Looks up a slot by collection and id.
    pub fn slot(&self, collection: DocumentCollection, document_id: &str) -> Option<&DocumentSlot> {
        self.collection(collection)
            .iter()
            .find(|s| s.document_id == document_id)
    }

    /// Appends files to a slot, creating it if missing.
    ///
    /// Re-uploads append to the existing file list; they never replace it.
    /// A new slot starts as `pending_verification`, and appending files to a
    /// reviewed slot sends it back to `pending_verification` so the added
    /// files are checked too. The slot's type label is updated when a
    /// non-blank one is supplied.
    ///
    /// # Errors
    ///
    /// - `Validation` if `document_id` or any file URL is blank
    pub fn upsert_slot(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
        document_type: &str,
        new_file_urls: Vec<String>,
    ) -> Result<DocumentSlot, VerificationError> {
        let document_id = document_id.trim();
        if document_id.is_empty() {
            return Err(ValidationError::empty_field("document_id").into());
        }
        if new_file_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(ValidationError::empty_field("file_urls").into());
        }

        let slots = self.collection_mut(collection);
        match slots.iter_mut().find(|s| s.document_id == document_id) {
            Some(slot) => {
                if !new_file_urls.is_empty() {
                    slot.status = DocumentStatus::PendingVerification;
                }
                slot.file_urls.extend(new_file_urls);
                if !document_type.trim().is_empty() {
                    slot.document_type = document_type.trim().to_string();
                }
                Ok(slot.clone())
            }
            None => {
                let slot = DocumentSlot::new(
                    document_id.to_string(),
                    document_type.trim().to_string(),
                    new_file_urls,
                );
                slots.push(slot.clone());
                Ok(slot)
            }
        }
    }

    /// Removes all files from a slot and returns it to `pending_verification`.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if no such slot exists
    pub fn clear_slot(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
    ) -> Result<DocumentSlot, VerificationError> {
        let slot = self.slot_mut(collection, document_id)?;
        slot.file_urls.clear();
        slot.status = DocumentStatus::PendingVerification;
        Ok(slot.clone())
    }

    /// Sets a slot's verification status.
    ///
    /// Never touches the parent request's status.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if no such slot exists
    pub fn set_slot_status(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
        status: DocumentStatus,
    ) -> Result<DocumentSlot, VerificationError> {
        let slot = self.slot_mut(collection, document_id)?;
        slot.status = status;
        Ok(slot.clone())
    }

    /// Ids of required slots that are not yet approved.
    pub fn unapproved_required(&self) -> Vec<String> {
        self.required
            .iter()
            .filter(|s| !s.is_approved())
            .map(|s| s.document_id.clone())
            .collect()
    }

    /// True when every required slot is approved.
    pub fn required_complete(&self) -> bool {
        self.required.iter().all(DocumentSlot::is_approved)
    }

    /// Total number of files across both collections.
    pub fn total_files(&self) -> usize {
        self.required
            .iter()
            .chain(self.optional.iter())
            .map(DocumentSlot::file_count)
            .sum()
    }

    fn collection_mut(&mut self, collection: DocumentCollection) -> &mut Vec<DocumentSlot> {
        match collection {
            DocumentCollection::Required => &mut self.required,
            DocumentCollection::Optional => &mut self.optional,
        }
    }

    fn slot_mut(
        &mut self,
        collection: DocumentCollection,
        document_id: &str,
    ) -> Result<&mut DocumentSlot, VerificationError> {
        self.collection_mut(collection)
            .iter_mut()
            .find(|s| s.document_id == document_id)
            .ok_or_else(|| VerificationError::slot_not_found(collection, document_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn collection_parses_known_names_only() {
        assert_eq!(
            "required".parse::<DocumentCollection>(),
            Ok(DocumentCollection::Required)
        );
        assert_eq!(
            "optional".parse::<DocumentCollection>(),
            Ok(DocumentCollection::Optional)
        );
        assert!("extra".parse::<DocumentCollection>().is_err());
    }

    #[test]
    fn upsert_creates_pending_slot() {
        let mut set = DocumentSet::new();
        let slot = set
            .upsert_slot(DocumentCollection::Required, "id_proof", "passport", urls(&["f1"]))
            .unwrap();

        assert_eq!(slot.document_id(), "id_proof");
        assert_eq!(slot.document_type(), "passport");
        assert_eq!(slot.file_count(), 1);
        assert_eq!(slot.status(), DocumentStatus::PendingVerification);
        assert_eq!(set.required().len(), 1);
        assert!(set.optional().is_empty());
    }

    #[test]
    fn upsert_appends_to_existing_slot() {
        let mut set = DocumentSet::new();
        set.upsert_slot(DocumentCollection::Required, "id_proof", "passport", urls(&["f1"]))
            .unwrap();
        let slot = set
            .upsert_slot(DocumentCollection::Required, "id_proof", "", urls(&["f2", "f3"]))
            .unwrap();

        assert_eq!(slot.file_urls(), &urls(&["f1", "f2", "f3"])[..]);
        assert_eq!(slot.file_count(), 3);
        assert_eq!(slot.document_type(), "passport");
        assert_eq!(set.required().len(), 1);
    }

    #[test]
    fn appending_to_reviewed_slot_reopens_verification() {
        let mut set = DocumentSet::new();
        set.upsert_slot(DocumentCollection::Required, "id_proof", "passport", urls(&["f1"]))
            .unwrap();
        set.set_slot_status(DocumentCollection::Required, "id_proof", DocumentStatus::Approved)
            .unwrap();

        let slot = set
            .upsert_slot(DocumentCollection::Required, "id_proof", "", urls(&["f2"]))
            .unwrap();

        assert_eq!(slot.status(), DocumentStatus::PendingVerification);
        assert_eq!(set.unapproved_required(), vec!["id_proof".to_string()]);
    }

    #[test]
    fn same_document_id_is_independent_per_collection() {
        let mut set = DocumentSet::new();
        set.upsert_slot(DocumentCollection::Required, "deck", "pdf", urls(&["a"]))
            .unwrap();
        set.upsert_slot(DocumentCollection::Optional, "deck", "pdf", urls(&["b"]))
            .unwrap();

        assert_eq!(set.required().len(), 1);
        assert_eq!(set.optional().len(), 1);
        assert_eq!(
            set.slot(DocumentCollection::Optional, "deck").unwrap().file_urls(),
            &urls(&["b"])[..]
        );
    }

    #[test]
    fn upsert_rejects_blank_document_id() {
        let mut set = DocumentSet::new();
        let result = set.upsert_slot(DocumentCollection::Required, "  ", "x", urls(&["f"]));
        assert!(matches!(result, Err(VerificationError::Validation(_))));
        assert!(set.required().is_empty());
    }

    #[test]
    fn upsert_rejects_blank_file_url() {
        let mut set = DocumentSet::new();
        let result = set.upsert_slot(DocumentCollection::Optional, "deck", "x", urls(&["ok", ""]));
        assert!(matches!(result, Err(VerificationError::Validation(_))));
        assert!(set.optional().is_empty());
    }

    #[test]
    fn set_slot_status_requires_existing_slot() {
        let mut set = DocumentSet::new();
        let result = set.set_slot_status(
            DocumentCollection::Required,
            "missing",
            DocumentStatus::Approved,
        );
        assert!(matches!(result, Err(VerificationError::SlotNotFound { .. })));
    }

    #[test]
    fn required_complete_tracks_required_slots_only() {
        let mut set = DocumentSet::new();
        assert!(set.required_complete());

        set.upsert_slot(DocumentCollection::Required, "id_proof", "id", urls(&["f"]))
            .unwrap();
        set.upsert_slot(DocumentCollection::Optional, "extra", "misc", urls(&["g"]))
            .unwrap();
        assert!(!set.required_complete());
        assert_eq!(set.unapproved_required(), vec!["id_proof".to_string()]);

        set.set_slot_status(DocumentCollection::Required, "id_proof", DocumentStatus::Approved)
            .unwrap();
        assert!(set.required_complete());
        assert!(set.unapproved_required().is_empty());
    }

    #[test]
    fn clear_slot_empties_files_and_resets_status() {
        let mut set = DocumentSet::new();
        set.upsert_slot(DocumentCollection::Required, "id_proof", "id", urls(&["f1", "f2"]))
            .unwrap();
        set.set_slot_status(DocumentCollection::Required, "id_proof", DocumentStatus::Approved)
            .unwrap();

        let slot = set.clear_slot(DocumentCollection::Required, "id_proof").unwrap();
        assert_eq!(slot.file_count(), 0);
        assert_eq!(slot.status(), DocumentStatus::PendingVerification);
    }

    #[test]
    fn persisted_file_count_is_ignored() {
        let json = r#"{
            "required": [{
                "document_id": "id_proof",
                "document_type": "id",
                "file_urls": ["a", "b"],
                "status": "approved",
                "file_count": 99
            }]
        }"#;
        let set: DocumentSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.required()[0].file_count(), 2);
        assert!(set.optional().is_empty());
    }

    proptest! {
        #[test]
        fn file_count_matches_urls_after_any_upserts(
            uploads in proptest::collection::vec(
                (0usize..3, proptest::collection::vec("[a-z]{1,8}", 0..4)),
                1..20,
            )
        ) {
            let ids = ["id_proof", "deck", "financials"];
            let mut set = DocumentSet::new();
            let mut expected = [0usize; 3];

            for (idx, files) in uploads {
                expected[idx] += files.len();
                set.upsert_slot(DocumentCollection::Required, ids[idx], "doc", files).unwrap();
            }

            for slot in set.required() {
                prop_assert_eq!(slot.file_count(), slot.file_urls().len());
                let idx = ids.iter().position(|id| *id == slot.document_id()).unwrap();
                prop_assert_eq!(slot.file_count(), expected[idx]);
            }
        }
    }
}
