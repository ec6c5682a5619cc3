//! Storage → database synchronization.

pub mod plan;
pub mod service;

pub use plan::{PlannedDocument, PlannedUpdate, SyncPlan, plan_sync};
pub use service::{SyncService, SyncStatus};
