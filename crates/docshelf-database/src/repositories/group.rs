//! Group repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_entity::analytics::TopGroup;
use docshelf_entity::group::model::UNRANKED_DISPLAY_ORDER;
use docshelf_entity::group::{CreateGroup, Group, GroupOrder};

use crate::connection::DbTransaction;

/// Repository for groups (textbooks).
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Group>> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find group", e))
    }

    /// List every group.
    pub async fn find_all(&self) -> AppResult<Vec<Group>> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups ORDER BY display_order ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list groups", e))
    }

    /// Count groups.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count groups", e))
    }

    /// Create a group discovered by a sync.
    pub async fn create(
        &self,
        tx: &mut DbTransaction<'_>,
        data: &CreateGroup,
    ) -> AppResult<Group> {
        sqlx::query_as::<_, Group>(
            "INSERT INTO groups (id, name, storage_path, category_id, display_order, created_at, updated_at) \
             VALUES ($1, $2, $3, NULL, $4, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.storage_path)
        .bind(UNRANKED_DISPLAY_ORDER)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create group", e))
    }

    /// Apply new display orders atomically. Returns the number of groups changed.
    pub async fn reorder(&self, orders: &[GroupOrder]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut updated = 0;
        for order in orders {
            let result = sqlx::query(
                "UPDATE groups SET display_order = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(order.id)
            .bind(order.display_order)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reorder groups", e))?;
            updated += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e)
        })?;
        Ok(updated)
    }

    /// Assign groups to a category, or to none. Returns the number changed.
    pub async fn set_category(&self, ids: &[Uuid], category_id: Option<Uuid>) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE groups SET category_id = $2, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move groups", e))?;
        Ok(result.rows_affected())
    }

    /// Groups ranked by lifetime click counters of their active documents.
    pub async fn top_by_clicks(&self, limit: i64) -> AppResult<Vec<TopGroup>> {
        sqlx::query_as::<_, TopGroup>(
            "SELECT g.id, g.name, g.storage_path, \
             COALESCE(SUM(d.click_count), 0)::BIGINT AS total_clicks, \
             COUNT(d.id) AS file_count \
             FROM groups g \
             JOIN documents d ON d.group_id = g.id AND d.is_active = true \
             GROUP BY g.id \
             ORDER BY total_clicks DESC, g.name ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank groups", e))
    }
}
