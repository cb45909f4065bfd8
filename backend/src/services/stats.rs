//! Progress statistics service
//!
//! Read-only views derived from the activity log and plan history: daily
//! water progress against the newest plan's goal, the weight series across
//! saved profile snapshots, and the dashboard overview. Everything here is
//! recomputed on every read; nothing derived is ever stored.

use crate::state::AppState;
use crate::stores::{ActivityLogStore, PlanStore};
use chrono::NaiveDate;
use fitquest_shared::progress::{self, LevelInfo};

/// Water consumed on one day against the active goal
#[derive(Debug, Clone)]
pub struct WaterProgress {
    pub date: NaiveDate,
    pub total_ml: u64,
    pub goal_ml: u32,
    pub progress_percent: f64,
    pub goal_met: bool,
}

/// One point of the weight series, taken from a plan's profile snapshot
#[derive(Debug, Clone)]
pub struct WeightObservation {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Dashboard overview numbers
#[derive(Debug, Clone)]
pub struct Overview {
    pub level: LevelInfo,
    pub total_workouts: u32,
    pub total_water_ml: u64,
    pub plans_generated: u32,
    pub latest_plan_date: Option<NaiveDate>,
}

/// Statistics service for derived read views
pub struct StatsService;

impl StatsService {
    /// Level standing plus lifetime totals
    pub async fn overview(state: &AppState) -> Overview {
        let data = state.data().read().await;
        Overview {
            level: progress::level_info(ActivityLogStore::list(&data)),
            total_workouts: ActivityLogStore::workouts(&data).len() as u32,
            total_water_ml: ActivityLogStore::lifetime_water_ml(&data),
            plans_generated: PlanStore::list(&data).len() as u32,
            latest_plan_date: PlanStore::latest(&data).map(|record| record.date),
        }
    }

    /// Water consumed on `date` against the newest plan's recommendation,
    /// falling back to the default goal when no plan exists
    pub async fn water_progress(state: &AppState, date: NaiveDate) -> WaterProgress {
        let data = state.data().read().await;
        let total_ml = ActivityLogStore::water_total_ml(&data, date);
        let goal_ml = progress::water_goal_ml(
            PlanStore::latest(&data).map(|record| record.plan.recommended_water_l),
        );

        WaterProgress {
            date,
            total_ml,
            goal_ml,
            progress_percent: Self::calculate_progress(total_ml, goal_ml),
            goal_met: Self::is_goal_met(total_ml, goal_ml),
        }
    }

    /// One weight per saved plan, ordered by ascending plan date
    pub async fn weight_series(state: &AppState) -> Vec<WeightObservation> {
        let data = state.data().read().await;
        PlanStore::weight_series(&data)
            .into_iter()
            .map(|(date, weight_kg)| WeightObservation { date, weight_kg })
            .collect()
    }

    /// Percentage of the daily goal consumed (may exceed 100)
    pub fn calculate_progress(total_ml: u64, goal_ml: u32) -> f64 {
        if goal_ml == 0 {
            return 0.0;
        }
        (total_ml as f64 / goal_ml as f64) * 100.0
    }

    /// Whether consumption reached the daily goal
    pub fn is_goal_met(total_ml: u64, goal_ml: u32) -> bool {
        total_ml >= u64::from(goal_ml)
    }
}
