//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One file record belonging to a group.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// The owning group.
    pub group_id: Uuid,
    /// Display name (the file name, including extension).
    pub name: String,
    /// Full storage path within the provider.
    pub storage_path: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Provider-reported modification time.
    pub modified_at: Option<DateTime<Utc>>,
    /// Popularity counter.
    pub click_count: i64,
    /// False once the file disappeared from storage.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Lowercased storage path, the key used to match scan entries.
    pub fn path_key(&self) -> String {
        self.storage_path.to_lowercase()
    }
}

/// A document discovered by a storage scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    /// The owning group.
    pub group_id: Uuid,
    /// Display name.
    pub name: String,
    /// Full storage path.
    pub storage_path: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Provider-reported modification time.
    pub modified_at: Option<DateTime<Utc>>,
}

/// A change to an existing document detected by a storage scan.
///
/// Applying an update always marks the document active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    /// Document ID.
    pub id: Uuid,
    /// The owning group (may change when a folder is renamed upstream).
    pub group_id: Uuid,
    /// Display name.
    pub name: String,
    /// Full storage path.
    pub storage_path: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Provider-reported modification time.
    pub modified_at: Option<DateTime<Utc>>,
}
