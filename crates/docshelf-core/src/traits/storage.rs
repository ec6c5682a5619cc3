//! Storage provider trait for the remote document source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Absolute path within the provider, with the provider's display casing.
    pub path: String,
    /// File name (last path segment).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub last_modified: Option<DateTime<Utc>>,
    /// Whether this is a directory.
    pub is_directory: bool,
}

/// Result of one scan of the library root.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Files and folders reported by the provider.
    pub entries: Vec<StorageObjectMeta>,
    /// Paths reported deleted since the cursor (incremental scans only).
    pub deleted_paths: Vec<String>,
    /// Cursor to resume from on the next incremental scan.
    pub cursor: Option<String>,
    /// Whether this was a full listing rather than a delta.
    pub is_full: bool,
}

/// Trait for the remote file-storage backends that feed the library.
///
/// Implementations exist for Dropbox and the local filesystem in
/// `docshelf-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "dropbox", "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Recursively scan `root`.
    ///
    /// With a cursor, providers that support it return only the changes
    /// since that cursor; otherwise a full listing is returned.
    async fn scan(&self, root: &str, cursor: Option<&str>) -> AppResult<ScanResult>;
}
