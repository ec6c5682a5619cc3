//! Sync trigger and status handlers.

use axum::Json;
use axum::extract::{Query, State};

use docshelf_entity::sync::{SyncKind, SyncLog};
use docshelf_service::SyncStatus;

use crate::dto::request::{LimitQuery, ManualSyncQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::parse_or_default;
use crate::state::AppState;

/// POST /api/sync/manual?type=full|incremental
///
/// Runs to completion and returns the finished log. 409 while another
/// sync is in progress.
pub async fn manual(
    State(state): State<AppState>,
    Query(query): Query<ManualSyncQuery>,
) -> ApiResult<Json<ApiResponse<SyncLog>>> {
    let kind: SyncKind = parse_or_default(query.kind.as_deref())?;
    tracing::info!(kind = %kind, "Manual sync requested");

    let log = state.sync_service.run(kind).await?;
    Ok(Json(ApiResponse::ok(log)))
}

/// GET /api/sync/status
pub async fn status(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<SyncStatus>>> {
    let status = state.sync_service.status().await?;
    Ok(Json(ApiResponse::ok(status)))
}

/// GET /api/sync/logs?limit=
pub async fn logs(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<SyncLog>>>> {
    let logs = state.sync_service.recent_logs(query.limit).await?;
    Ok(Json(ApiResponse::ok(logs)))
}
