//! Read-side query handlers over committed verification requests.

mod admin_queue;
mod approved_feed;
mod dashboard_counts;
mod list_pitches;
mod paging;

pub use admin_queue::AdminQueueHandler;
pub use approved_feed::{ApprovedFeedHandler, MyApprovedPitchesHandler};
pub use dashboard_counts::{DashboardCounts, DashboardCountsHandler};
pub use list_pitches::{ListByOwnerHandler, ListByOwnerQuery, ListByStatusHandler, ListByStatusQuery};
pub use paging::{paged, RequestStream};
