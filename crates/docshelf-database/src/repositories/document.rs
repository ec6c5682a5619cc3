//! Document repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::types::PageRequest;
use docshelf_entity::analytics::TopDocumentRow;
use docshelf_entity::document::{Document, DocumentUpdate, NewDocument};
use docshelf_entity::library::LibraryRow;

use crate::connection::{self, DbTransaction};

const LIBRARY_SELECT: &str = "SELECT d.id AS document_id, d.name AS document_name, \
     d.storage_path AS document_path, d.size_bytes, d.modified_at, d.click_count, \
     g.id AS group_id, g.name AS group_name, g.storage_path AS group_path, \
     g.display_order AS group_display_order, c.id AS category_id, \
     c.name AS category_name, c.icon AS category_icon, \
     c.display_order AS category_display_order \
     FROM documents d \
     JOIN groups g ON g.id = d.group_id \
     LEFT JOIN categories c ON c.id = g.category_id \
     WHERE d.is_active = true \
     ORDER BY d.name ASC, d.id ASC \
     LIMIT $1 OFFSET $2";

/// Repository for document queries and sync writes.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one page of active documents joined with group and category.
    pub async fn fetch_library_page(&self, page: &PageRequest) -> AppResult<Vec<LibraryRow>> {
        sqlx::query_as::<_, LibraryRow>(LIBRARY_SELECT)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch library page", e)
            })
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Every document, active or not. Used to plan a sync.
    pub async fn find_all(&self) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY storage_path ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Active documents of a group, most clicked first.
    pub async fn find_active_by_group(&self, group_id: Uuid) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE group_id = $1 AND is_active = true \
             ORDER BY click_count DESC, name ASC",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list group documents", e)
        })
    }

    /// Count active documents.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE is_active = true")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))
    }

    /// Begin a transaction for a batch of sync writes.
    pub async fn begin(&self) -> AppResult<DbTransaction<'static>> {
        connection::begin(&self.pool).await
    }

    /// Insert a newly discovered document.
    pub async fn insert(
        &self,
        tx: &mut DbTransaction<'_>,
        doc: &NewDocument,
    ) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (id, group_id, name, storage_path, size_bytes, modified_at, \
             click_count, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, 0, true, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(doc.group_id)
        .bind(&doc.name)
        .bind(&doc.storage_path)
        .bind(doc.size_bytes)
        .bind(doc.modified_at)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert document", e))
    }

    /// Apply a scan-detected change and mark the document active.
    pub async fn update(
        &self,
        tx: &mut DbTransaction<'_>,
        change: &DocumentUpdate,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE documents SET group_id = $2, name = $3, storage_path = $4, size_bytes = $5, \
             modified_at = $6, is_active = true, updated_at = NOW() WHERE id = $1",
        )
        .bind(change.id)
        .bind(change.group_id)
        .bind(&change.name)
        .bind(&change.storage_path)
        .bind(change.size_bytes)
        .bind(change.modified_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Document {} not found", change.id)));
        }
        Ok(())
    }

    /// Mark documents inactive. Returns the number of rows changed.
    pub async fn deactivate_many(
        &self,
        tx: &mut DbTransaction<'_>,
        ids: &[Uuid],
    ) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "UPDATE documents SET is_active = false, updated_at = NOW() \
             WHERE id = ANY($1) AND is_active = true",
        )
        .bind(ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to deactivate documents", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Active documents with the highest click counters.
    pub async fn top_by_clicks(&self, limit: i64) -> AppResult<Vec<TopDocumentRow>> {
        sqlx::query_as::<_, TopDocumentRow>(
            "SELECT d.id, d.name, d.storage_path, d.click_count, g.id AS group_id, \
             g.name AS group_name, g.storage_path AS group_path \
             FROM documents d JOIN groups g ON g.id = d.group_id \
             WHERE d.is_active = true \
             ORDER BY d.click_count DESC, d.name ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank documents", e))
    }

    /// Every active document with its group, for folder aggregation.
    pub async fn find_active_with_groups(&self) -> AppResult<Vec<TopDocumentRow>> {
        sqlx::query_as::<_, TopDocumentRow>(
            "SELECT d.id, d.name, d.storage_path, d.click_count, g.id AS group_id, \
             g.name AS group_name, g.storage_path AS group_path \
             FROM documents d JOIN groups g ON g.id = d.group_id \
             WHERE d.is_active = true",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }
}
