//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docshelf_core::config::AppConfig;
use docshelf_core::result::AppResult;
use docshelf_database::DatabasePool;
use docshelf_database::repositories::{
    CategoryRepository, ClickRepository, DocumentRepository, GroupRepository,
    SyncLogRepository, TitleRequestRepository,
};
use docshelf_service::{
    AnalyticsService, DocumentService, GroupService, LibrarySource, LibraryService,
    RequestService, SyncService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    /// Library tree materialization
    pub library_service: Arc<LibraryService>,
    /// Document lookup and click recording
    pub document_service: Arc<DocumentService>,
    /// Title request voting
    pub request_service: Arc<RequestService>,
    /// Group ordering, moves and detail
    pub group_service: Arc<GroupService>,
    /// Click analytics
    pub analytics_service: Arc<AnalyticsService>,
    /// Storage synchronization
    pub sync_service: Arc<SyncService>,
}

impl AppState {
    /// Wire repositories, the storage provider and services.
    pub async fn build(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let pool = db.pool().clone();

        let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
        let click_repo = Arc::new(ClickRepository::new(pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(pool.clone()));
        let group_repo = Arc::new(GroupRepository::new(pool.clone()));
        let request_repo = Arc::new(TitleRequestRepository::new(pool.clone()));
        let sync_log_repo = Arc::new(SyncLogRepository::new(pool));

        let provider = docshelf_storage::build_provider(&config.storage).await?;

        let library_service = Arc::new(LibraryService::new(
            Arc::clone(&document_repo) as Arc<dyn LibrarySource>,
            config.library.fetch_page_size,
        ));
        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&click_repo),
        ));
        let request_service = Arc::new(RequestService::new(
            request_repo,
            config.requests.clone(),
        ));
        let group_service = Arc::new(GroupService::new(
            Arc::clone(&group_repo),
            category_repo,
            Arc::clone(&document_repo),
            Arc::clone(&click_repo),
        ));
        let analytics_service = Arc::new(AnalyticsService::new(
            click_repo,
            Arc::clone(&document_repo),
            Arc::clone(&group_repo),
        ));
        let sync_service = Arc::new(SyncService::new(
            provider,
            group_repo,
            document_repo,
            sync_log_repo,
            &config.storage,
            &config.sync,
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            library_service,
            document_service,
            request_service,
            group_service,
            analytics_service,
            sync_service,
        })
    }
}
