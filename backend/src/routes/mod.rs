//! Route definitions for the FitQuest API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod activities;
mod character;
mod health;
mod history;
mod plans;
mod stats;

pub use activities::activity_routes;
pub use character::character_routes;
pub use history::history_routes;
pub use plans::plan_routes;
pub use stats::stats_routes;

/// Request timeout. Plan generation against a local model is the slowest
/// operation in the API; the ceiling must sit above the generator's own
/// timeout so the model call fails first with a useful error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitQuest API v1" }))
        .nest("/activities", activity_routes())
        .nest("/plans", plan_routes())
        .nest("/stats", stats_routes())
        .nest("/character", character_routes())
        .merge(history_routes())
}
