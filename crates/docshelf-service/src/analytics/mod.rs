//! Click analytics (aggregation only).

pub mod buckets;
pub mod folders;
pub mod service;

pub use folders::{ROOT_FOLDER_NAME, folder_bucket, folder_stats};
pub use service::AnalyticsService;
