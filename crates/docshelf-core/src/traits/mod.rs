//! Core traits defined in `docshelf-core` and implemented by other crates.

pub mod storage;

pub use storage::{ScanResult, StorageObjectMeta, StorageProvider};
