//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::queries::{
    AdminQueueHandler, ApprovedFeedHandler, DashboardCounts, DashboardCountsHandler,
    ListByOwnerHandler, ListByOwnerQuery, ListByStatusHandler, ListByStatusQuery,
    MyApprovedPitchesHandler, RequestStream,
};
pub use handlers::verification::{
    ClearDocumentCommand, ClearDocumentHandler, GetPitchHandler, GetPitchQuery,
    ResubmitPitchCommand, ResubmitPitchHandler, ReviewPitchCommand, ReviewPitchHandler,
    ReviewPitchResult, SetDocumentStatusCommand, SetDocumentStatusHandler, SubmitPitchCommand,
    SubmitPitchHandler, UploadDocumentCommand, UploadDocumentHandler,
};
