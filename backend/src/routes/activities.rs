//! Activity log API routes

use crate::error::ApiError;
use crate::services::ActivityService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitquest_shared::types::{
    ActivityEntryResponse, ActivityLogResponse, LogActivityRequest, LogActivityResponse,
};

/// Create activity log routes
pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_activities).post(log_activity))
        .route("/workouts", get(list_workouts))
}

/// POST /api/v1/activities - Log a workout or water intake
async fn log_activity(
    State(state): State<AppState>,
    Json(req): Json<LogActivityRequest>,
) -> Result<Json<LogActivityResponse>, ApiError> {
    let logged = ActivityService::log(&state, req).await?;

    Ok(Json(LogActivityResponse {
        entry: ActivityEntryResponse::from(&logged.entry),
        level_up: logged.level_up,
    }))
}

/// GET /api/v1/activities - List all logged entries, most recent first
async fn list_activities(State(state): State<AppState>) -> Json<ActivityLogResponse> {
    let entries = ActivityService::list(&state).await;

    Json(ActivityLogResponse {
        entries: entries.iter().map(ActivityEntryResponse::from).collect(),
    })
}

/// GET /api/v1/activities/workouts - List workout entries, newest date first
async fn list_workouts(State(state): State<AppState>) -> Json<ActivityLogResponse> {
    let workouts = ActivityService::recent_workouts(&state).await;

    Json(ActivityLogResponse {
        entries: workouts.iter().map(ActivityEntryResponse::from).collect(),
    })
}
