//! Document service.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_database::repositories::{ClickRepository, DocumentRepository};
use docshelf_entity::document::Document;

/// Looks up documents and records clicks.
#[derive(Debug, Clone)]
pub struct DocumentService {
    document_repo: Arc<DocumentRepository>,
    click_repo: Arc<ClickRepository>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(document_repo: Arc<DocumentRepository>, click_repo: Arc<ClickRepository>) -> Self {
        Self {
            document_repo,
            click_repo,
        }
    }

    /// Fetch an active document.
    pub async fn get(&self, id: Uuid) -> AppResult<Document> {
        self.document_repo
            .find_by_id(id)
            .await?
            .filter(|d| d.is_active)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Record a click and return the document's new click count.
    pub async fn record_click(&self, id: Uuid) -> AppResult<i64> {
        let count = self
            .click_repo
            .record(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;
        debug!(document_id = %id, count, "Click recorded");
        Ok(count)
    }
}
