//! Where the library rows come from.

use async_trait::async_trait;

use docshelf_core::result::AppResult;
use docshelf_core::types::PageRequest;
use docshelf_database::repositories::DocumentRepository;
use docshelf_entity::library::LibraryRow;

/// A paginated source of active library rows.
#[async_trait]
pub trait LibrarySource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch one page of active rows in a stable order.
    async fn fetch_page(&self, page: &PageRequest) -> AppResult<Vec<LibraryRow>>;
}

#[async_trait]
impl LibrarySource for DocumentRepository {
    async fn fetch_page(&self, page: &PageRequest) -> AppResult<Vec<LibraryRow>> {
        self.fetch_library_page(page).await
    }
}
