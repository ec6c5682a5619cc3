//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use docshelf_entity::group::GroupOrder;

/// Library tree query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TreeQuery {
    /// `name` (default) or `clicks`.
    pub sort: Option<String>,
}

/// Title request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTitleRequest {
    /// Requested title. Trimmed and length-checked by the service.
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,
}

/// Listing limit query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// Admin request listing query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminRequestQuery {
    /// `pending`, `fulfilled` or `rejected`; all when absent.
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// Request status change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRequestStatus {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Group reorder body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReorderGroupsRequest {
    #[validate(length(min = 1, message = "At least one textbook is required"))]
    pub textbooks: Vec<GroupOrder>,
}

/// Move a single group. A null category means uncategorized.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveGroupRequest {
    pub textbook_id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

/// Move several groups at once.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveGroupsRequest {
    #[validate(length(min = 1, message = "At least one textbook is required"))]
    pub textbook_ids: Vec<Uuid>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

/// Analytics overview query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodQuery {
    /// `today`, `week` or `month` (default).
    pub period: Option<String>,
}

/// Hourly report query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyQuery {
    /// `YYYY-MM-DD`; today (KST) when absent.
    pub date: Option<String>,
}

/// Top groups query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopGroupsQuery {
    pub limit: Option<i64>,
    /// `week`, `month` or `all` (default).
    pub period: Option<String>,
}

/// Manual sync query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManualSyncQuery {
    /// `incremental` (default) or `full`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_requires_entries() {
        let req = ReorderGroupsRequest { textbooks: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_move_accepts_null_category() {
        let id = Uuid::new_v4();
        let req: MoveGroupRequest = serde_json::from_value(serde_json::json!({
            "textbook_id": id,
            "category_id": null
        }))
        .unwrap();
        assert_eq!(req.textbook_id, id);
        assert!(req.category_id.is_none());

        let req: MoveGroupsRequest = serde_json::from_value(serde_json::json!({
            "textbook_ids": [id]
        }))
        .unwrap();
        assert!(req.category_id.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_long_title_rejected() {
        let req = CreateTitleRequest {
            title: "가".repeat(201),
        };
        assert!(req.validate().is_err());
    }
}
