//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests: an application
//! wired to in-memory storage and a canned plan generator, so tests never
//! touch the filesystem or the network.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitquest_backend::config::AppConfig;
use fitquest_backend::generation::{GenerationError, PlanGenerator};
use fitquest_backend::state::AppState;
use fitquest_backend::storage::MemoryStorage;
use fitquest_backend::{routes, stores};
use fitquest_shared::models::{DayMeals, GeneratedPlan, UserProfile, Weekday};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Plan generator returning a fixed plan
pub struct StubPlanGenerator;

#[async_trait]
impl PlanGenerator for StubPlanGenerator {
    async fn generate(&self, _profile: &UserProfile) -> Result<GeneratedPlan, GenerationError> {
        Ok(sample_plan())
    }
}

/// A schema-complete plan: two exercises every day except Sunday (rest day),
/// 3.5 liters of recommended water
pub fn sample_plan() -> GeneratedPlan {
    let mut workout_plan = BTreeMap::new();
    let mut diet_plan = BTreeMap::new();
    for day in Weekday::ALL {
        workout_plan.insert(
            day,
            vec!["Squats (3x10)".to_string(), "Lunges (3x12)".to_string()],
        );
        diet_plan.insert(day, DayMeals::default());
    }
    workout_plan.insert(Weekday::Sunday, Vec::new());

    GeneratedPlan {
        summary: "Consistency beats intensity".to_string(),
        workout_plan,
        diet_plan,
        recommended_water_l: 3.5,
    }
}

/// A complete generation request body
pub fn generate_request_body(weight_kg: f64) -> String {
    serde_json::json!({
        "age": 30,
        "gender": "female",
        "weight_kg": weight_kg,
        "height_cm": 170.0,
        "activity_level": "lightly_active",
        "fitness_goal": "general_fitness",
        "timeframe_weeks": 8,
        "water_intake_l": 2.0
    })
    .to_string()
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub storage: Arc<MemoryStorage>,
}

impl TestApp {
    /// Create a test application over fresh in-memory storage
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Build the application the way startup does: load persisted state from
    /// `storage`, persist a reset if it was corrupt, then serve
    pub fn with_storage(storage: Arc<MemoryStorage>) -> Self {
        let loaded = stores::load(storage.as_ref()).expect("storage must be readable");
        if loaded.recovered {
            stores::persist(&loaded.data, storage.as_ref()).expect("reset must persist");
        }

        let state = AppState::new(
            loaded.data,
            storage.clone(),
            Arc::new(StubPlanGenerator),
            AppConfig::default(),
            loaded.recovered,
        );
        let app = routes::create_router(state);

        Self { app, storage }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
