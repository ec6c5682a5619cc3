//! # docshelf-service
//!
//! Business logic service layer for DocShelf. Services orchestrate the
//! repositories and the storage provider to implement application use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod analytics;
pub mod document;
pub mod group;
pub mod library;
pub mod request;
pub mod sync;

pub use analytics::AnalyticsService;
pub use document::DocumentService;
pub use group::GroupService;
pub use library::{LibrarySource, LibraryService};
pub use request::{RequestService, VoteOutcome};
pub use sync::{SyncService, SyncStatus};
