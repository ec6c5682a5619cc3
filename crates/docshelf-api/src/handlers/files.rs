//! Library tree and click handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use docshelf_core::types::GroupSort;
use docshelf_entity::library::LibraryTree;

use crate::dto::request::TreeQuery;
use crate::dto::response::{ApiResponse, ClickResponse};
use crate::error::ApiResult;
use crate::extractors::parse_or_default;
use crate::state::AppState;

/// GET /api/files/tree?sort=name|clicks
pub async fn tree(
    State(state): State<AppState>,
    Query(query): Query<TreeQuery>,
) -> ApiResult<Json<ApiResponse<LibraryTree>>> {
    let sort: GroupSort = parse_or_default(query.sort.as_deref())?;
    let tree = state.library_service.tree(sort).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/files/{id}/click
pub async fn record_click(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ClickResponse>>> {
    let click_count = state.document_service.record_click(id).await?;
    Ok(Json(ApiResponse::ok(ClickResponse { click_count })))
}
