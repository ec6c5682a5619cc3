//! Flat library rows and the grouped library view built from them.

use chrono::{DateTime, Utc};
use docshelf_core::types::GroupSort;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::tree::{FolderNode, TreeDocument};
use crate::category::CategorySummary;

/// One active document joined with its group and optional category.
#[derive(Debug, Clone, FromRow)]
pub struct LibraryRow {
    /// Document ID.
    pub document_id: Uuid,
    /// Document display name.
    pub document_name: String,
    /// Document storage path.
    pub document_path: String,
    /// Document size in bytes.
    pub size_bytes: i64,
    /// Document modification time.
    pub modified_at: Option<DateTime<Utc>>,
    /// Document click counter.
    pub click_count: i64,
    /// Group ID.
    pub group_id: Uuid,
    /// Group display name.
    pub group_name: String,
    /// Group storage root path.
    pub group_path: String,
    /// Group display-order rank.
    pub group_display_order: i32,
    /// Category ID, if categorized.
    pub category_id: Option<Uuid>,
    /// Category name.
    pub category_name: Option<String>,
    /// Category icon.
    pub category_icon: Option<String>,
    /// Category display-order rank.
    pub category_display_order: Option<i32>,
}

impl LibraryRow {
    /// The document projection placed in the tree.
    pub fn tree_document(&self) -> TreeDocument {
        TreeDocument {
            id: self.document_id,
            name: self.document_name.clone(),
            storage_path: self.document_path.clone(),
            size_bytes: self.size_bytes,
            click_count: self.click_count,
            modified_at: self.modified_at,
        }
    }

    /// The category summary, when the group is categorized.
    pub fn category(&self) -> Option<CategorySummary> {
        let id = self.category_id?;
        Some(CategorySummary {
            id,
            name: self.category_name.clone().unwrap_or_default(),
            icon: self
                .category_icon
                .clone()
                .unwrap_or_else(|| crate::category::model::DEFAULT_CATEGORY_ICON.to_string()),
            display_order: self
                .category_display_order
                .unwrap_or(crate::group::model::UNRANKED_DISPLAY_ORDER),
        })
    }
}

/// A group together with its materialized, pruned tree.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryGroup {
    /// Group ID.
    pub id: Uuid,
    /// Group name.
    pub name: String,
    /// Group storage root path.
    pub storage_path: String,
    /// Group display-order rank.
    pub display_order: i32,
    /// Category summary, if categorized.
    pub category: Option<CategorySummary>,
    /// Sum of click counters over all documents in the tree.
    pub total_clicks: i64,
    /// Number of documents in the tree.
    pub file_count: usize,
    /// The pruned folder tree.
    pub tree: FolderNode,
}

/// Aggregate counts over the served library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    /// Number of non-empty groups.
    pub total_groups: usize,
    /// Number of documents across those groups.
    pub total_files: usize,
}

/// The full library response.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryTree {
    /// Groups in the requested order.
    pub groups: Vec<LibraryGroup>,
    /// The sort mode applied.
    pub sort: GroupSort,
    /// Aggregate counts.
    pub stats: LibraryStats,
}
