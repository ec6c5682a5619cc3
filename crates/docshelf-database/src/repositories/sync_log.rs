//! Sync log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_entity::sync::{SyncCounters, SyncKind, SyncLog, SyncRunStatus};

/// Repository for sync run records.
#[derive(Debug, Clone)]
pub struct SyncLogRepository {
    pool: PgPool,
}

impl SyncLogRepository {
    /// Create a new sync log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a `running` log entry.
    pub async fn start(&self, kind: SyncKind) -> AppResult<SyncLog> {
        sqlx::query_as::<_, SyncLog>(
            "INSERT INTO sync_logs (id, kind, status, started_at, groups_created, documents_added, \
             documents_updated, documents_reactivated, documents_deactivated) \
             VALUES ($1, $2, $3, NOW(), 0, 0, 0, 0, 0) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .bind(SyncRunStatus::Running)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to start sync log", e))
    }

    /// Mark a run completed with its counters and cursor.
    pub async fn complete(
        &self,
        id: Uuid,
        counters: &SyncCounters,
        cursor: Option<&str>,
    ) -> AppResult<SyncLog> {
        sqlx::query_as::<_, SyncLog>(
            "UPDATE sync_logs SET status = $2, finished_at = NOW(), groups_created = $3, \
             documents_added = $4, documents_updated = $5, documents_reactivated = $6, \
             documents_deactivated = $7, cursor = $8 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(SyncRunStatus::Completed)
        .bind(counters.groups_created)
        .bind(counters.documents_added)
        .bind(counters.documents_updated)
        .bind(counters.documents_reactivated)
        .bind(counters.documents_deactivated)
        .bind(cursor)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete sync log", e))?
        .ok_or_else(|| AppError::not_found(format!("Sync log {id} not found")))
    }

    /// Mark a run failed.
    pub async fn fail(&self, id: Uuid, message: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE sync_logs SET status = $2, finished_at = NOW(), error_message = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(SyncRunStatus::Failed)
        .bind(message)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark sync failed", e))?;
        Ok(())
    }

    /// The most recent run of any status.
    pub async fn latest(&self) -> AppResult<Option<SyncLog>> {
        sqlx::query_as::<_, SyncLog>("SELECT * FROM sync_logs ORDER BY started_at DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load sync log", e))
    }

    /// The cursor left by the most recent completed run that recorded one.
    pub async fn last_cursor(&self) -> AppResult<Option<String>> {
        sqlx::query_scalar(
            "SELECT cursor FROM sync_logs WHERE status = $1 AND cursor IS NOT NULL \
             ORDER BY started_at DESC LIMIT 1",
        )
        .bind(SyncRunStatus::Completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load sync cursor", e))
    }

    /// The latest runs, newest first.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<SyncLog>> {
        sqlx::query_as::<_, SyncLog>("SELECT * FROM sync_logs ORDER BY started_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sync logs", e))
    }
}
