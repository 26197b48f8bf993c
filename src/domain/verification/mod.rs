//! Verification module - Pitch verification requests and their review.
//!
//! A submitted pitch carries a set of document slots. Admins verify slots
//! individually and then approve, reject, or ask for clarification on the
//! request as a whole.

mod aggregate;
mod document;
mod errors;
mod review;
mod status;

pub use aggregate::{DocumentChange, PersonalInfo, PitchData, Review, VerificationRequest};
pub use document::{DocumentCollection, DocumentSet, DocumentSlot};
pub use errors::VerificationError;
pub use review::{ReviewDecision, ReviewOutcome};
pub use status::{DocumentStatus, VerificationStatus};
