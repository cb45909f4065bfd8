//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;
use fitquest_backend::storage::StorageBackend;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
    assert!(!body.contains("recovered"));
}

#[tokio::test]
async fn test_readiness_reports_recovery_after_corrupt_storage() {
    let storage = Arc::new(fitquest_backend::storage::MemoryStorage::new());
    storage.set("activity_log", "{definitely not json").unwrap();

    let app = common::TestApp::with_storage(storage);
    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["recovered"], true);

    // The reset state starts empty
    let (_, activities) = app.get("/api/v1/activities").await;
    let response: serde_json::Value = serde_json::from_str(&activities).unwrap();
    assert_eq!(response["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_api_v1_root() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("FitQuest API v1"));
}
