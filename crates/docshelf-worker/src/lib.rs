//! Scheduled synchronization for DocShelf.
//!
//! The scheduler triggers incremental and full storage syncs on cron
//! schedules. Runs go through [`docshelf_service::SyncService`], so a
//! scheduled run that overlaps a manual one is skipped.

pub mod scheduler;

pub use scheduler::SyncScheduler;
