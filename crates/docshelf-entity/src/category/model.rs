//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fallback icon for categories without one.
pub const DEFAULT_CATEGORY_ICON: &str = "📚";

/// A display label used to cluster groups.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Display-order rank (ascending).
    pub display_order: i32,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// The category fields embedded in library output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category ID.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Icon glyph.
    pub icon: String,
    /// Display-order rank.
    pub display_order: i32,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            icon: category.icon.clone(),
            display_order: category.display_order,
        }
    }
}
