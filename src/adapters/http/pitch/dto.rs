//! JSON request and response shapes for pitch endpoints.
//!
//! Admin and dashboard endpoints render requests with the same types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};
use crate::domain::verification::{
    DocumentSlot, DocumentStatus, PersonalInfo, PitchData, VerificationRequest,
    VerificationStatus,
};
use crate::ports::{ListOptions, Page, PitchSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Contact details as submitted. The owner is always the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInfoRequest {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub business_registration_number: Option<String>,
    #[serde(default)]
    pub industry_type: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PersonalInfoRequest {
    pub fn into_domain(self, owner: UserId) -> PersonalInfo {
        PersonalInfo {
            user_id: owner,
            full_name: self.full_name,
            business_name: self.business_name,
            email: self.email,
            contact_number: self.contact_number,
            business_registration_number: self.business_registration_number,
            industry_type: self.industry_type,
            country: self.country,
        }
    }
}

/// Body of `POST /api/pitches`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPitchRequest {
    pub personal_info: PersonalInfoRequest,
    pub pitch_data: PitchData,
    #[serde(default)]
    pub user_profile_id: Option<String>,
}

/// Body of a document upload. Files are already stored; only URLs arrive here.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadDocumentRequest {
    pub document_type: String,
    pub file_urls: Vec<String>,
}

/// Body of an admin document verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDocumentStatusRequest {
    pub status: String,
}

/// Body of an admin rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectPitchRequest {
    #[serde(default)]
    pub reason: String,
}

/// `?status=&limit=&offset=` on listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListParams {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            limit: self.limit,
            offset: self.offset,
            after: None,
        }
    }

    pub fn status(&self) -> Result<Option<VerificationStatus>, ValidationError> {
        crate::adapters::http::request::verification_status(self.status.as_deref())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentSlotResponse {
    pub document_id: String,
    pub document_type: String,
    pub file_urls: Vec<String>,
    pub file_count: usize,
    pub status: DocumentStatus,
}

impl From<&DocumentSlot> for DocumentSlotResponse {
    fn from(slot: &DocumentSlot) -> Self {
        Self {
            document_id: slot.document_id().to_string(),
            document_type: slot.document_type().to_string(),
            file_urls: slot.file_urls().to_vec(),
            file_count: slot.file_count(),
            status: slot.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentsResponse {
    pub required: Vec<DocumentSlotResponse>,
    pub optional: Vec<DocumentSlotResponse>,
}

/// Full view of a verification request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchResponse {
    pub id: String,
    pub status: VerificationStatus,
    pub personal_info: PersonalInfo,
    pub pitch_data: PitchData,
    pub documents: DocumentsResponse,
    pub rejection_reason: Option<String>,
    pub submitted_at: String,
    pub reviewed_at: Option<String>,
    pub reviewed_by: Option<String>,
    pub user_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<&VerificationRequest> for PitchResponse {
    fn from(request: &VerificationRequest) -> Self {
        let documents = request.documents();
        Self {
            id: request.id().to_string(),
            status: request.status(),
            personal_info: request.personal_info().clone(),
            pitch_data: request.pitch_data().clone(),
            documents: DocumentsResponse {
                required: documents.required().iter().map(Into::into).collect(),
                optional: documents.optional().iter().map(Into::into).collect(),
            },
            rejection_reason: request.rejection_reason().map(str::to_string),
            submitted_at: rfc3339(request.submitted_at()),
            reviewed_at: request.reviewed_at().map(rfc3339),
            reviewed_by: request.reviewed_by().map(|a| a.to_string()),
            user_profile_id: request.user_profile_id().map(|p| p.to_string()),
            score: request.score(),
        }
    }
}

/// Feed entry; documents and review internals are not exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchSummaryResponse {
    pub id: String,
    pub personal_info: PersonalInfo,
    pub pitch_data: PitchData,
    pub submitted_at: String,
    pub approved_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<PitchSummary> for PitchSummaryResponse {
    fn from(summary: PitchSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            personal_info: summary.personal_info,
            pitch_data: summary.pitch_data,
            submitted_at: rfc3339(&summary.submitted_at),
            approved_at: summary.reviewed_at.as_ref().map(rfc3339),
            score: summary.score,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub has_more: bool,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>, convert: impl FnMut(U) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(convert).collect(),
            total: page.total,
            has_more: page.has_more,
        }
    }
}

fn rfc3339(at: &Timestamp) -> String {
    at.as_datetime().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AdminId, UserId};
    use crate::domain::verification::{DocumentCollection, ReviewDecision};

    fn acme() -> VerificationRequest {
        let owner = UserId::new("founder-1").unwrap();
        VerificationRequest::create(
            PersonalInfo::new(Some(owner), "a@b.com"),
            PitchData::new("v1", "Acme"),
            None,
        )
        .unwrap()
    }

    #[test]
    fn submit_body_accepts_minimal_json() {
        let body: SubmitPitchRequest = serde_json::from_value(serde_json::json!({
            "personal_info": { "email": "a@b.com" },
            "pitch_data": { "video_url": "v1", "startup_name": "Acme" }
        }))
        .unwrap();

        let info = body
            .personal_info
            .into_domain(UserId::new("founder-1").unwrap());
        assert_eq!(info.user_id.as_str(), "founder-1");
        assert!(!body.pitch_data.is_public);
    }

    #[test]
    fn pitch_response_renders_documents_and_review() {
        let mut request = acme();
        request
            .upsert_document(DocumentCollection::Required, "id_proof", "id", vec!["f1".into()])
            .unwrap();
        request
            .apply_review(
                ReviewDecision::reject("blurry"),
                AdminId::new("admin-1").unwrap(),
                Timestamp::now(),
            )
            .unwrap();

        let response = PitchResponse::from(&request);

        assert_eq!(response.status, VerificationStatus::Rejected);
        assert_eq!(response.documents.required[0].file_count, 1);
        assert_eq!(response.rejection_reason.as_deref(), Some("blurry"));
        assert_eq!(response.reviewed_by.as_deref(), Some("admin-1"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "rejected");
        assert!(json.get("score").is_none());
    }

    #[test]
    fn list_params_parse_status() {
        let params = ListParams {
            status: Some("approved".to_string()),
            limit: Some(5),
            offset: None,
        };
        assert_eq!(params.status().unwrap(), Some(VerificationStatus::Approved));
        assert_eq!(params.options().effective_limit(), 5);
    }
}
