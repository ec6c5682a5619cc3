//! Group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Display order assigned to groups that were never ranked.
pub const UNRANKED_DISPLAY_ORDER: i32 = 999;

/// A top-level document collection mapped to one storage root folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Unique group identifier.
    pub id: Uuid,
    /// Display name (the storage folder name).
    pub name: String,
    /// Storage root path, with a trailing slash (e.g. `/library/Book A/`).
    pub storage_path: String,
    /// Optional category.
    pub category_id: Option<Uuid>,
    /// Display-order rank within its category.
    pub display_order: i32,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
    /// When the group was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroup {
    /// Display name.
    pub name: String,
    /// Storage root path.
    pub storage_path: String,
}

/// A new display order for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOrder {
    /// Group ID.
    pub id: Uuid,
    /// New display-order rank.
    pub display_order: i32,
}
