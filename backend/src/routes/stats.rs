//! Progress statistics API routes

use crate::services::{self, StatsService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitquest_shared::types::{
    DateQuery, OverviewResponse, WaterProgressResponse, WeightPoint, WeightSeriesResponse,
};

/// Create stats routes
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .route("/water", get(water_progress))
        .route("/weight-series", get(weight_series))
}

/// GET /api/v1/stats/overview - Level standing and lifetime totals
async fn overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let overview = StatsService::overview(&state).await;

    Json(OverviewResponse {
        level: overview.level,
        total_workouts: overview.total_workouts,
        total_water_ml: overview.total_water_ml,
        plans_generated: overview.plans_generated,
        latest_plan_date: overview.latest_plan_date,
    })
}

/// GET /api/v1/stats/water - Water progress for a day (defaults to today)
async fn water_progress(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<WaterProgressResponse> {
    let date = query.date.unwrap_or_else(services::local_today);
    let progress = StatsService::water_progress(&state, date).await;

    Json(WaterProgressResponse {
        date: progress.date,
        total_ml: progress.total_ml,
        goal_ml: progress.goal_ml,
        progress_percent: progress.progress_percent,
        goal_met: progress.goal_met,
    })
}

/// GET /api/v1/stats/weight-series - Weight at each plan generation, by plan date
async fn weight_series(State(state): State<AppState>) -> Json<WeightSeriesResponse> {
    let series = StatsService::weight_series(&state).await;

    Json(WeightSeriesResponse {
        points: series
            .into_iter()
            .map(|point| WeightPoint {
                date: point.date,
                weight_kg: point.weight_kg,
            })
            .collect(),
    })
}
