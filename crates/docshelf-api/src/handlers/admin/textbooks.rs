//! Admin group (textbook) organization handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docshelf_entity::analytics::GroupDetail;

use crate::dto::request::{MoveGroupRequest, MoveGroupsRequest, ReorderGroupsRequest};
use crate::dto::response::{ApiResponse, UpdatedResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// PUT /api/admin/textbooks/reorder
pub async fn reorder(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ReorderGroupsRequest>,
) -> ApiResult<Json<ApiResponse<UpdatedResponse>>> {
    let updated = state.group_service.reorder(&body.textbooks).await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// PUT /api/admin/textbooks/move
pub async fn move_one(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<MoveGroupRequest>,
) -> ApiResult<Json<ApiResponse<UpdatedResponse>>> {
    let updated = state
        .group_service
        .move_to_category(&[body.textbook_id], body.category_id)
        .await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// POST /api/admin/textbooks/move
pub async fn move_many(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<MoveGroupsRequest>,
) -> ApiResult<Json<ApiResponse<UpdatedResponse>>> {
    let updated = state
        .group_service
        .move_to_category(&body.textbook_ids, body.category_id)
        .await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// GET /api/admin/textbooks/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<GroupDetail>>> {
    let detail = state.group_service.detail(id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}
