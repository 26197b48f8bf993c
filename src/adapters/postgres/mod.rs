//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresVerificationRepository` - Versioned writes and locked document changes
//! - `PostgresVerificationReader` - Status and owner listings
//! - `PostgresMessageCounter` - Unread totals from the messages table
//!
//! All adapters share the single process-wide `PgPool` built at startup.

mod message_counter;
mod verification_reader;
mod verification_repository;

pub use message_counter::PostgresMessageCounter;
pub use verification_reader::PostgresVerificationReader;
pub use verification_repository::PostgresVerificationRepository;
