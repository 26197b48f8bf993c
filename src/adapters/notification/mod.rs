//! Review notification adapters.
//!
//! - `logging` - Writes each notification to the structured log
//! - `recording` - Keeps notifications in memory for assertions

mod logging;
mod recording;

pub use logging::LoggingReviewNotifier;
pub use recording::RecordingReviewNotifier;
