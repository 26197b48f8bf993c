//! In-memory adapters.
//!
//! Back the persistence and messaging ports with process-local maps for
//! tests and for running the service without a database.

mod message_counter;
mod verification_store;

pub use message_counter::InMemoryMessageCounter;
pub use verification_store::InMemoryVerificationStore;
