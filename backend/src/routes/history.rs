//! History management API routes

use crate::error::ApiError;
use crate::services::HistoryService;
use crate::state::AppState;
use axum::{extract::State, routing::delete, Json, Router};

/// Create history routes
pub fn history_routes() -> Router<AppState> {
    Router::new().route("/history", delete(clear_history))
}

/// DELETE /api/v1/history - Clear the activity log and plan history
async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    HistoryService::clear_all(&state).await?;
    Ok(Json(serde_json::json!({"cleared": true})))
}
