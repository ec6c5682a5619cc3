//! Admin click analytics handlers.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;

use docshelf_core::error::AppError;
use docshelf_entity::analytics::{
    AnalyticsPeriod, ClickOverview, HourlyReport, RankingPeriod, TopDocument, TopFolder, TopGroup,
};

use crate::dto::request::{HourlyQuery, LimitQuery, PeriodQuery, TopGroupsQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::parse_or_default;
use crate::state::AppState;

const DEFAULT_TOP_FILES: i64 = 10;
const DEFAULT_TOP_FOLDERS: i64 = 5;
const DEFAULT_TOP_GROUPS: i64 = 10;

/// GET /api/admin/analytics?period=today|week|month
pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<ApiResponse<ClickOverview>>> {
    let period: AnalyticsPeriod = parse_or_default(query.period.as_deref())?;
    let overview = state.analytics_service.overview(period).await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/admin/hourly-stats?date=YYYY-MM-DD
pub async fn hourly(
    State(state): State<AppState>,
    Query(query): Query<HourlyQuery>,
) -> ApiResult<Json<ApiResponse<HourlyReport>>> {
    let date = query
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(parse_date)
        .transpose()?;

    let report = state.analytics_service.hourly(date).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/admin/top-files?limit=
pub async fn top_files(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TopDocument>>>> {
    let files = state
        .analytics_service
        .top_documents(query.limit.unwrap_or(DEFAULT_TOP_FILES))
        .await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// GET /api/admin/top-folders?limit=
pub async fn top_folders(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TopFolder>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_FOLDERS).max(1) as usize;
    let folders = state.analytics_service.top_folders(limit).await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/admin/top-textbooks?limit=&period=week|month|all
pub async fn top_textbooks(
    State(state): State<AppState>,
    Query(query): Query<TopGroupsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TopGroup>>>> {
    let period: RankingPeriod = parse_or_default(query.period.as_deref())?;
    let groups = state
        .analytics_service
        .top_groups(query.limit.unwrap_or(DEFAULT_TOP_GROUPS), period)
        .await?;
    Ok(Json(ApiResponse::ok(groups)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date: '{raw}'. Expected YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2024").is_err());
    }
}
