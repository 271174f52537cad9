//! Integration tests for the service probes

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let response = app.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_checks_database_and_uploads() {
    let app = common::TestApp::new().await;

    let response = app.get("/health/ready", None).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let json = response.json();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["checks"]["database"]["ok"], true);
    assert_eq!(json["checks"]["uploads"]["ok"], true);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_fails_when_upload_dir_is_gone() {
    let app = common::TestApp::new().await;

    tokio::fs::remove_dir(&app.uploads_dir)
        .await
        .expect("remove upload dir");

    let response = app.get("/health/ready", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json();
    assert_eq!(json["status"], "not_ready");
    assert_eq!(json["checks"]["database"]["ok"], true);
    assert_eq!(json["checks"]["uploads"]["ok"], false);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let response = app.get("/health/live", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "alive");
}
