//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `VerificationRepository` - Write side: insert, versioned update, atomic document changes
//! - `VerificationReader` - Read side: status and owner listings, owner counts
//!
//! ## Collaborator Ports
//!
//! - `SessionValidator` - Bearer token to authenticated caller
//! - `MessageCounter` - Unread message totals from the messaging store
//! - `ReviewNotifier` - Fire-and-forget review outcome delivery

mod message_counter;
mod review_notifier;
mod session_validator;
mod verification_reader;
mod verification_repository;

pub use message_counter::MessageCounter;
pub use review_notifier::{NotificationError, ReviewNotification, ReviewNotifier};
pub use session_validator::SessionValidator;
pub use verification_reader::{
    ListOptions, OwnerCounts, Page, PageCursor, PitchSummary, VerificationReader,
};
pub use verification_repository::{RepositoryError, VerificationRepository};
