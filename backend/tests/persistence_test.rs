//! Integration tests for state durability across process restarts

mod common;

use axum::http::StatusCode;
use fitquest_backend::storage::MemoryStorage;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_state_survives_restart() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let app = common::TestApp::with_storage(storage.clone());
        let body = json!({
            "kind": "workout",
            "activity_type": "Running",
            "duration_minutes": 30,
            "intensity": "medium"
        });
        let (status, _) = app.post("/api/v1/activities", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let (status, plan) = app
            .post("/api/v1/plans/generate", &common::generate_request_body(65.0))
            .await;
        assert_eq!(status, StatusCode::OK);
        let plan: serde_json::Value = serde_json::from_str(&plan).unwrap();
        let plan_id = plan["id"].as_str().unwrap();

        app.post(
            &format!("/api/v1/plans/{plan_id}/complete"),
            &json!({"day": "Monday"}).to_string(),
        )
        .await;
        app.put("/api/v1/character", &json!({"gender": "male"}).to_string())
            .await;
    }

    // A fresh app over the same storage reloads everything
    let app = common::TestApp::with_storage(storage);

    let (status, activities) = app.get("/api/v1/activities").await;
    assert_eq!(status, StatusCode::OK);
    let activities: serde_json::Value = serde_json::from_str(&activities).unwrap();
    let entries = activities["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // The completion entry was logged after the manual one, so it lists first
    assert_eq!(entries[0]["activity_type"], "Squats");
    assert_eq!(entries[1]["activity_type"], "Running");

    let (_, history) = app.get("/api/v1/plans").await;
    let history: serde_json::Value = serde_json::from_str(&history).unwrap();
    assert_eq!(history["plans"].as_array().unwrap().len(), 1);
    assert_eq!(history["plans"][0]["completion"]["Monday"], true);

    let (_, character) = app.get("/api/v1/character").await;
    let character: serde_json::Value = serde_json::from_str(&character).unwrap();
    assert_eq!(character["gender"], "male");

    let (_, ready) = app.get("/health/ready").await;
    let ready: serde_json::Value = serde_json::from_str(&ready).unwrap();
    assert!(ready["recovered"].is_null());
}

#[tokio::test]
async fn test_completion_state_blocks_relogging_after_restart() {
    let storage = Arc::new(MemoryStorage::new());

    let plan_id = {
        let app = common::TestApp::with_storage(storage.clone());
        let (_, plan) = app
            .post("/api/v1/plans/generate", &common::generate_request_body(70.0))
            .await;
        let plan: serde_json::Value = serde_json::from_str(&plan).unwrap();
        let plan_id = plan["id"].as_str().unwrap().to_string();
        app.post(
            &format!("/api/v1/plans/{plan_id}/complete"),
            &json!({"day": "Friday"}).to_string(),
        )
        .await;
        plan_id
    };

    let app = common::TestApp::with_storage(storage);

    let (status, response) = app
        .post(
            &format!("/api/v1/plans/{plan_id}/complete"),
            &json!({"day": "Friday"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["completed"], false);

    let (_, activities) = app.get("/api/v1/activities").await;
    let activities: serde_json::Value = serde_json::from_str(&activities).unwrap();
    assert_eq!(activities["entries"].as_array().unwrap().len(), 1);
}
