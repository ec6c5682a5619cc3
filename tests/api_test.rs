//! HTTP API tests that run without a database.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_unreachable_database() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health/detailed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["database"], "unavailable");
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(
        response.body["data"]["storage_provider"],
        app.config.storage.provider.as_str()
    );
    assert_eq!(response.body["data"]["is_syncing"], false);
}

#[tokio::test]
async fn test_tree_rejects_unknown_sort() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/files/tree?sort=size", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_tree_database_failure_is_internal_error() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/files/tree", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_short_title_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request_with_headers(
            "POST",
            "/api/requests",
            Some(json!({ "title": "  a  " })),
            &[("x-forwarded-for", "203.0.113.9")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_request_body_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request("POST", "/api/requests", Some(json!({ "name": "수능특강" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_admin_request_filter_rejects_unknown_status() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/admin/requests?status=archived", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reorder_requires_textbooks() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "PUT",
            "/api/admin/textbooks/reorder",
            Some(json!({ "textbooks": [] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_move_requires_textbooks() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/admin/textbooks/move",
            Some(json!({ "textbook_ids": [], "category_id": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analytics_rejects_bad_parameters() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/admin/analytics?period=year", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/admin/hourly-stats?date=03-09-2024", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/admin/top-textbooks?period=decade", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_manual_sync_rejects_unknown_type() {
    let app = TestApp::new().await;
    let response = app.request("POST", "/api/sync/manual?type=partial", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/notices", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
