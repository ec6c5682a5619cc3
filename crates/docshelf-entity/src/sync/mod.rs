//! Synchronization run entities.

pub mod model;
pub mod status;

pub use model::{SyncCounters, SyncLog};
pub use status::{SyncKind, SyncRunStatus};
