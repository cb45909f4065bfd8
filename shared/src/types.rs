//! API request and response types

use crate::models::{
    ActivityDetails, ActivityEntry, ActivityKind, ActivityLevel, FitnessGoal, Gender,
    GeneratedPlan, Intensity, SavedPlanRecord, UserProfile, Weekday,
};
use crate::progress::LevelInfo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Activity Log Types
// ============================================================================

/// Log a workout or water intake entry.
///
/// The payload carries the same `kind` tag as stored entries, so clients
/// send `{"kind": "workout", ...}` or `{"kind": "water_intake", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActivityRequest {
    /// Calendar day the entry counts toward (defaults to today)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

/// Activity entry response (flattened for display)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntryResponse {
    pub id: String,
    pub date: NaiveDate,
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_ml: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&ActivityEntry> for ActivityEntryResponse {
    fn from(entry: &ActivityEntry) -> Self {
        let (activity_type, duration_minutes, intensity, amount_ml) = match &entry.details {
            ActivityDetails::Workout {
                activity_type,
                duration_minutes,
                intensity,
            } => (
                Some(activity_type.clone()),
                Some(*duration_minutes),
                Some(*intensity),
                None,
            ),
            ActivityDetails::WaterIntake { amount_ml } => (None, None, None, Some(*amount_ml)),
        };
        Self {
            id: entry.id.to_string(),
            date: entry.date,
            kind: entry.kind(),
            activity_type,
            duration_minutes,
            intensity,
            amount_ml,
            notes: entry.notes.clone(),
        }
    }
}

/// Activity log listing, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogResponse {
    pub entries: Vec<ActivityEntryResponse>,
}

/// Push payload announcing that a mutation crossed a level boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelUpNotification {
    pub new_level: u32,
}

/// Result of logging an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActivityResponse {
    pub entry: ActivityEntryResponse,
    /// Present only when this entry pushed the character over a level boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_up: Option<LevelUpNotification>,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Request a fresh AI-generated plan for the given profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    pub timeframe_weeks: u32,
    /// Language the plan content should be written in
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Current daily water intake in liters
    pub water_intake_l: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_foods: Option<String>,
}

fn default_target_language() -> String {
    "English".to_string()
}

impl GeneratePlanRequest {
    /// Convert into the profile snapshot stored alongside the plan
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            activity_level: self.activity_level,
            fitness_goal: self.fitness_goal,
            timeframe_weeks: self.timeframe_weeks,
            target_language: self.target_language,
            water_intake_l: self.water_intake_l,
            preferred_foods: self.preferred_foods,
        }
    }
}

/// A saved plan with its completion state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlanResponse {
    pub id: String,
    pub date: NaiveDate,
    pub profile: UserProfile,
    pub plan: GeneratedPlan,
    pub completion: BTreeMap<Weekday, bool>,
}

impl From<&SavedPlanRecord> for SavedPlanResponse {
    fn from(record: &SavedPlanRecord) -> Self {
        Self {
            id: record.id.to_string(),
            date: record.date,
            profile: record.profile.clone(),
            plan: record.plan.clone(),
            completion: record.completion.clone(),
        }
    }
}

/// Plan history listing, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanHistoryResponse {
    pub plans: Vec<SavedPlanResponse>,
}

/// Mark one weekday of a plan as completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteDayRequest {
    pub day: Weekday,
}

/// Result of a day-completion attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteDayResponse {
    /// True when this call transitioned the day to complete; false means the
    /// day was already complete and nothing changed
    pub completed: bool,
    /// The workout entry logged on behalf of the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<ActivityEntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_up: Option<LevelUpNotification>,
}

// ============================================================================
// Character Types
// ============================================================================

/// Choose the avatar variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectCharacterRequest {
    pub gender: Gender,
}

/// Currently selected avatar, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

// ============================================================================
// Stats Types
// ============================================================================

/// Optional date filter for daily stats (defaults to today)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Water consumed on one day against the active plan's goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterProgressResponse {
    pub date: NaiveDate,
    pub total_ml: u64,
    pub goal_ml: u32,
    pub progress_percent: f64,
    pub goal_met: bool,
}

/// One point of the weight-over-time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Weight recorded at each plan generation, ordered by plan date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSeriesResponse {
    pub points: Vec<WeightPoint>,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub level: LevelInfo,
    pub total_workouts: u32,
    pub total_water_ml: u64,
    pub plans_generated: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_plan_date: Option<NaiveDate>,
}
