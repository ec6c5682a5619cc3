//! Route definitions for the DocShelf HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router and thread the state through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(file_routes())
        .merge(request_routes())
        .merge(admin_routes())
        .merge(sync_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Library tree and click recording
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files/tree", get(handlers::files::tree))
        .route("/files/{id}/click", post(handlers::files::record_click))
}

/// Public title requests
fn request_routes() -> Router<AppState> {
    Router::new().route(
        "/requests",
        get(handlers::requests::list).post(handlers::requests::create),
    )
}

/// Admin: requests, textbook organization, analytics
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/requests", get(handlers::admin::requests::list))
        .route(
            "/admin/requests/{id}",
            put(handlers::admin::requests::update_status),
        )
        .route(
            "/admin/textbooks/reorder",
            put(handlers::admin::textbooks::reorder),
        )
        .route(
            "/admin/textbooks/move",
            put(handlers::admin::textbooks::move_one).post(handlers::admin::textbooks::move_many),
        )
        .route("/admin/textbooks/{id}", get(handlers::admin::textbooks::detail))
        .route("/admin/analytics", get(handlers::admin::analytics::overview))
        .route("/admin/hourly-stats", get(handlers::admin::analytics::hourly))
        .route("/admin/top-files", get(handlers::admin::analytics::top_files))
        .route("/admin/top-folders", get(handlers::admin::analytics::top_folders))
        .route(
            "/admin/top-textbooks",
            get(handlers::admin::analytics::top_textbooks),
        )
}

/// Sync trigger, status and history
fn sync_routes() -> Router<AppState> {
    Router::new()
        .route("/sync/manual", post(handlers::sync::manual))
        .route("/sync/status", get(handlers::sync::status))
        .route("/sync/logs", get(handlers::sync::logs))
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
