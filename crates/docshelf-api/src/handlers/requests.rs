//! Public title request (voting) handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use docshelf_entity::request::TitleRequestSummary;
use docshelf_service::VoteOutcome;

use crate::dto::request::{CreateTitleRequest, LimitQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ClientIp, ValidatedJson};
use crate::state::AppState;

const DEFAULT_PUBLIC_LIMIT: i64 = 10;

/// POST /api/requests
pub async fn create(
    State(state): State<AppState>,
    client_ip: ClientIp,
    ValidatedJson(body): ValidatedJson<CreateTitleRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<VoteOutcome>>)> {
    let outcome = state
        .request_service
        .vote(&body.title, client_ip.as_deref())
        .await?;

    let status = if outcome.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ApiResponse::ok(outcome))))
}

/// GET /api/requests?limit=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TitleRequestSummary>>>> {
    let requests = state
        .request_service
        .list_public(query.limit.unwrap_or(DEFAULT_PUBLIC_LIMIT))
        .await?;
    Ok(Json(ApiResponse::ok(requests)))
}
