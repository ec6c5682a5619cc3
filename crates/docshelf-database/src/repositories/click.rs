//! Document click repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_entity::analytics::TopGroup;

/// Repository for click events.
#[derive(Debug, Clone)]
pub struct ClickRepository {
    pool: PgPool,
}

impl ClickRepository {
    /// Create a new click repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a click on an active document and bump its counter.
    ///
    /// Returns the new counter, or `None` when the document is unknown or
    /// inactive.
    pub async fn record(&self, document_id: Uuid) -> AppResult<Option<i64>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let count: Option<i64> = sqlx::query_scalar(
            "UPDATE documents SET click_count = click_count + 1, updated_at = NOW() \
             WHERE id = $1 AND is_active = true RETURNING click_count",
        )
        .bind(document_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count click", e))?;

        let Some(count) = count else {
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO document_clicks (id, document_id, clicked_at) VALUES ($1, $2, NOW())",
        )
        .bind(Uuid::new_v4())
        .bind(document_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record click", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit click", e)
        })?;
        Ok(Some(count))
    }

    /// Click timestamps in `[from, to)`.
    pub async fn timestamps_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<DateTime<Utc>>> {
        sqlx::query_scalar(
            "SELECT clicked_at FROM document_clicks \
             WHERE clicked_at >= $1 AND clicked_at < $2 ORDER BY clicked_at ASC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load clicks", e))
    }

    /// Click timestamps on a group's documents since `from`.
    pub async fn timestamps_for_group(
        &self,
        group_id: Uuid,
        from: DateTime<Utc>,
    ) -> AppResult<Vec<DateTime<Utc>>> {
        sqlx::query_scalar(
            "SELECT c.clicked_at FROM document_clicks c \
             JOIN documents d ON d.id = c.document_id \
             WHERE d.group_id = $1 AND c.clicked_at >= $2 ORDER BY c.clicked_at ASC",
        )
        .bind(group_id)
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load group clicks", e))
    }

    /// Groups ranked by clicks recorded since `from`.
    pub async fn top_groups_since(&self, from: DateTime<Utc>, limit: i64) -> AppResult<Vec<TopGroup>> {
        sqlx::query_as::<_, TopGroup>(
            "SELECT g.id, g.name, g.storage_path, COUNT(c.id) AS total_clicks, \
             (SELECT COUNT(*) FROM documents a WHERE a.group_id = g.id AND a.is_active = true) \
             AS file_count \
             FROM document_clicks c \
             JOIN documents d ON d.id = c.document_id \
             JOIN groups g ON g.id = d.group_id \
             WHERE c.clicked_at >= $1 AND d.is_active = true \
             GROUP BY g.id \
             ORDER BY total_clicks DESC, g.name ASC LIMIT $2",
        )
        .bind(from)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank groups", e))
    }
}
