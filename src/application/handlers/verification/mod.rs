//! Verification command and query handlers.

mod clear_document;
mod get_pitch;
mod resubmit_pitch;
mod review_pitch;
mod set_document_status;
mod submit_pitch;
mod upload_document;
mod versioned_update;

#[cfg(test)]
pub(crate) mod test_support;

pub use clear_document::{ClearDocumentCommand, ClearDocumentHandler};
pub use get_pitch::{GetPitchHandler, GetPitchQuery};
pub use resubmit_pitch::{ResubmitPitchCommand, ResubmitPitchHandler};
pub use review_pitch::{ReviewPitchCommand, ReviewPitchHandler, ReviewPitchResult};
pub use set_document_status::{SetDocumentStatusCommand, SetDocumentStatusHandler};
pub use submit_pitch::{SubmitPitchCommand, SubmitPitchHandler};
pub use upload_document::{UploadDocumentCommand, UploadDocumentHandler};
