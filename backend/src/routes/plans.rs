//! Plan generation and history API routes

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitquest_shared::types::{
    ActivityEntryResponse, CompleteDayRequest, CompleteDayResponse, GeneratePlanRequest,
    PlanHistoryResponse, SavedPlanResponse,
};

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(plan_history))
        .route("/generate", post(generate_plan))
        .route("/:id/complete", post(complete_day))
}

/// POST /api/v1/plans/generate - Generate a plan and prepend it to history
async fn generate_plan(
    State(state): State<AppState>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<Json<SavedPlanResponse>, ApiError> {
    let record = PlanService::generate_and_save(&state, req.into_profile()).await?;
    Ok(Json(SavedPlanResponse::from(&record)))
}

/// GET /api/v1/plans - List saved plans, most recent first
async fn plan_history(State(state): State<AppState>) -> Json<PlanHistoryResponse> {
    let records = PlanService::history(&state).await;
    Json(PlanHistoryResponse {
        plans: records.iter().map(SavedPlanResponse::from).collect(),
    })
}

/// POST /api/v1/plans/:id/complete - Mark one weekday of a plan complete
///
/// Completing an unknown plan or an already-complete day changes nothing and
/// reports `completed: false`.
async fn complete_day(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CompleteDayRequest>,
) -> Result<Json<CompleteDayResponse>, ApiError> {
    let plan_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid plan ID".to_string()))?;

    let outcome = PlanService::complete_day(&state, plan_id, req.day).await?;

    Ok(Json(CompleteDayResponse {
        completed: outcome.completed,
        entry: outcome.entry.as_ref().map(ActivityEntryResponse::from),
        level_up: outcome.level_up,
    }))
}
