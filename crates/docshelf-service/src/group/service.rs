//! Group service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_database::repositories::{
    CategoryRepository, ClickRepository, DocumentRepository, GroupRepository,
};
use docshelf_entity::analytics::{GroupDetail, GroupStatistics};
use docshelf_entity::group::GroupOrder;

use crate::analytics::buckets::{self, DETAIL_TREND_DAYS};
use crate::analytics::folders::folder_stats;

/// Admin operations on groups.
#[derive(Debug, Clone)]
pub struct GroupService {
    group_repo: Arc<GroupRepository>,
    category_repo: Arc<CategoryRepository>,
    document_repo: Arc<DocumentRepository>,
    click_repo: Arc<ClickRepository>,
}

impl GroupService {
    /// Creates a new group service.
    pub fn new(
        group_repo: Arc<GroupRepository>,
        category_repo: Arc<CategoryRepository>,
        document_repo: Arc<DocumentRepository>,
        click_repo: Arc<ClickRepository>,
    ) -> Self {
        Self {
            group_repo,
            category_repo,
            document_repo,
            click_repo,
        }
    }

    /// Apply new display orders in one transaction.
    pub async fn reorder(&self, orders: &[GroupOrder]) -> AppResult<u64> {
        if orders.is_empty() {
            return Err(AppError::validation("At least one group order is required"));
        }
        let mut ids = HashSet::new();
        if let Some(dup) = orders.iter().find(|o| !ids.insert(o.id)) {
            return Err(AppError::validation(format!(
                "Group {} appears more than once",
                dup.id
            )));
        }

        let updated = self.group_repo.reorder(orders).await?;
        info!(requested = orders.len(), updated, "Groups reordered");
        Ok(updated)
    }

    /// Move groups into a category, or out of any category with `None`.
    pub async fn move_to_category(
        &self,
        group_ids: &[Uuid],
        category_id: Option<Uuid>,
    ) -> AppResult<u64> {
        if group_ids.is_empty() {
            return Err(AppError::validation("At least one group is required"));
        }
        if let Some(category_id) = category_id {
            self.category_repo
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))?;
        }

        let moved = self.group_repo.set_category(group_ids, category_id).await?;
        if group_ids.len() == 1 && moved == 0 {
            return Err(AppError::not_found(format!(
                "Group {} not found",
                group_ids[0]
            )));
        }
        info!(
            requested = group_ids.len(),
            moved,
            category_id = ?category_id,
            "Groups moved"
        );
        Ok(moved)
    }

    /// Group detail with per-folder stats and a 30-day click trend.
    pub async fn detail(&self, id: Uuid) -> AppResult<GroupDetail> {
        let group = self
            .group_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Group {id} not found")))?;

        let documents = self.document_repo.find_active_by_group(id).await?;
        let folders = folder_stats(
            &group.storage_path,
            documents
                .iter()
                .map(|d| (d.storage_path.as_str(), d.click_count)),
        );

        let now = Utc::now();
        let today = buckets::kst_date(now);
        let first_day = today - chrono::Duration::days(DETAIL_TREND_DAYS - 1);
        let clicks = self
            .click_repo
            .timestamps_for_group(id, buckets::kst_day_start(first_day))
            .await?;
        let daily_clicks = buckets::daily_filled(&clicks, first_day, today);

        let statistics = GroupStatistics {
            total_documents: documents.len(),
            total_clicks: documents.iter().map(|d| d.click_count).sum(),
            total_folders: folders.len(),
        };

        Ok(GroupDetail {
            group,
            documents,
            folder_stats: folders,
            daily_clicks,
            statistics,
        })
    }
}
