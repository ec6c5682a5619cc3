//! Admin title request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use docshelf_entity::request::{RequestStatus, TitleRequest};

use crate::dto::request::{AdminRequestQuery, UpdateRequestStatus};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

const DEFAULT_ADMIN_LIMIT: i64 = 100;

/// GET /api/admin/requests?status=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AdminRequestQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TitleRequest>>>> {
    let status = query
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<RequestStatus>)
        .transpose()?;

    let requests = state
        .request_service
        .list_admin(status, query.limit.unwrap_or(DEFAULT_ADMIN_LIMIT))
        .await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// PUT /api/admin/requests/{id}
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateRequestStatus>,
) -> ApiResult<Json<ApiResponse<TitleRequest>>> {
    let status: RequestStatus = body.status.parse()?;
    let request = state.request_service.update_status(id, status).await?;
    Ok(Json(ApiResponse::ok(request)))
}
