//! Data models for the FitQuest application
//!
//! The plan schema (weekday keys, meal slots) doubles as the wire schema the
//! generation service must produce, so the serde names here are canonical.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Label used when a completed day has no exercise to borrow a name from
/// (rest day or missing schedule data).
pub const DEFAULT_WORKOUT_LABEL: &str = "Planned Workout";

// ============================================================================
// Calendar
// ============================================================================

/// Canonical weekday keys for workout/diet schedules and completion maps.
///
/// The `Ord` derive follows declaration order, so schedule maps iterate
/// Monday through Sunday and serialize with stable key order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in schedule order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Activity Log
// ============================================================================

/// Coarse discriminator for activity log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Workout,
    WaterIntake,
}

/// Workout intensity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Kind-specific payload of an activity entry.
///
/// Modeling this as an enum makes the "exactly one of duration/intensity or
/// amount, matching the kind" rule unrepresentable to violate: a workout
/// cannot carry a water amount and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityDetails {
    Workout {
        /// Free-text label, display only ("Running", "Squats", ...)
        activity_type: String,
        duration_minutes: u32,
        intensity: Intensity,
    },
    WaterIntake {
        amount_ml: u32,
    },
}

/// One logged event: a workout or a water intake, attributed to a calendar
/// day. Immutable once created; removed only by a full history clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    /// Local calendar day the entry counts toward (no time component)
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

impl ActivityEntry {
    pub fn kind(&self) -> ActivityKind {
        match self.details {
            ActivityDetails::Workout { .. } => ActivityKind::Workout,
            ActivityDetails::WaterIntake { .. } => ActivityKind::WaterIntake,
        }
    }

    pub fn is_workout(&self) -> bool {
        matches!(self.details, ActivityDetails::Workout { .. })
    }

    /// Water amount in ml, if this is a water-intake entry
    pub fn amount_ml(&self) -> Option<u32> {
        match self.details {
            ActivityDetails::WaterIntake { amount_ml } => Some(amount_ml),
            ActivityDetails::Workout { .. } => None,
        }
    }

    /// Display label of a workout entry
    pub fn activity_type(&self) -> Option<&str> {
        match &self.details {
            ActivityDetails::Workout { activity_type, .. } => Some(activity_type),
            ActivityDetails::WaterIntake { .. } => None,
        }
    }
}

// ============================================================================
// User Profile (snapshot)
// ============================================================================

/// Gender as supplied in the profile form; also the avatar variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Activity level on the standard five-step scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Human-readable description, also fed to the plan prompt
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// What the generated plan should optimize for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Maintenance,
    GeneralFitness,
}

impl FitnessGoal {
    pub fn description(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight loss",
            FitnessGoal::MuscleGain => "Muscle gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::GeneralFitness => "General fitness",
        }
    }
}

/// Biometric and lifestyle snapshot captured at plan-generation time.
///
/// Stored verbatim with the plan it produced and never recomputed; the
/// weight series reads weights from these snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    pub timeframe_weeks: u32,
    /// Language the generated plan content should be written in
    pub target_language: String,
    /// Baseline daily water intake in liters
    pub water_intake_l: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_foods: Option<String>,
}

// ============================================================================
// Generated Plan
// ============================================================================

/// A single meal item in the diet schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub description: String,
    pub calories: u32,
    pub protein_g: u32,
}

/// The four fixed meal slots of one diet day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayMeals {
    #[serde(rename = "Breakfast")]
    pub breakfast: Vec<Meal>,
    #[serde(rename = "Lunch")]
    pub lunch: Vec<Meal>,
    #[serde(rename = "Dinner")]
    pub dinner: Vec<Meal>,
    #[serde(rename = "Snacks")]
    pub snacks: Vec<Meal>,
}

/// Plan schema violations detected when interpreting generated content
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanSchemaError {
    #[error("workout plan is missing {0}")]
    MissingWorkoutDay(Weekday),

    #[error("diet plan is missing {0}")]
    MissingDietDay(Weekday),

    #[error("recommended water intake must be a positive number of liters")]
    InvalidWaterRecommendation,

    #[error("plan summary is empty")]
    EmptySummary,
}

/// A structured 7-day workout/diet plan as produced by the generation
/// service. An empty exercise list marks a rest day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Motivational summary shown above the schedule
    pub summary: String,
    /// Exercise descriptions per weekday; empty list = rest day
    pub workout_plan: BTreeMap<Weekday, Vec<String>>,
    /// Meal slots per weekday
    pub diet_plan: BTreeMap<Weekday, DayMeals>,
    /// Recommended daily water intake in liters
    pub recommended_water_l: f64,
}

impl GeneratedPlan {
    /// Check the fixed-schema invariants: all seven weekdays present in both
    /// schedules, a non-empty summary, and a positive water recommendation.
    pub fn validate(&self) -> Result<(), PlanSchemaError> {
        for day in Weekday::ALL {
            if !self.workout_plan.contains_key(&day) {
                return Err(PlanSchemaError::MissingWorkoutDay(day));
            }
            if !self.diet_plan.contains_key(&day) {
                return Err(PlanSchemaError::MissingDietDay(day));
            }
        }
        if self.summary.trim().is_empty() {
            return Err(PlanSchemaError::EmptySummary);
        }
        if !(self.recommended_water_l.is_finite() && self.recommended_water_l > 0.0) {
            return Err(PlanSchemaError::InvalidWaterRecommendation);
        }
        Ok(())
    }

    /// True when the day's exercise list is absent or empty
    pub fn is_rest_day(&self, day: Weekday) -> bool {
        self.workout_plan.get(&day).map_or(true, |e| e.is_empty())
    }

    /// Display label for the day's workout: the first exercise with any
    /// trailing parenthetical annotation removed ("Squats (3x10)" ->
    /// "Squats"), falling back to [`DEFAULT_WORKOUT_LABEL`] on rest days.
    pub fn workout_label(&self, day: Weekday) -> String {
        self.workout_plan
            .get(&day)
            .and_then(|exercises| exercises.first())
            .map(|first| strip_trailing_parenthetical(first))
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| DEFAULT_WORKOUT_LABEL.to_string())
    }
}

/// Remove a trailing "(...)" annotation and surrounding whitespace
fn strip_trailing_parenthetical(text: &str) -> String {
    let re = regex_lite::Regex::new(r"\s*\([^)]*\)\s*$").unwrap();
    re.replace(text.trim(), "").trim().to_string()
}

// ============================================================================
// Saved Plan Record
// ============================================================================

/// A generated plan together with the profile that produced it and the
/// per-day completion state. History keeps these most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlanRecord {
    pub id: Uuid,
    /// Creation day
    pub date: NaiveDate,
    pub profile: UserProfile,
    pub plan: GeneratedPlan,
    /// Absent key = not completed; true is never reverted
    #[serde(default)]
    pub completion: BTreeMap<Weekday, bool>,
}

impl SavedPlanRecord {
    pub fn new(date: NaiveDate, profile: UserProfile, plan: GeneratedPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            profile,
            plan,
            completion: BTreeMap::new(),
        }
    }

    pub fn is_day_complete(&self, day: Weekday) -> bool {
        self.completion.get(&day).copied().unwrap_or(false)
    }

    /// Mark a day complete. Returns false when the day was already complete;
    /// completion never reverts.
    pub fn mark_day_complete(&mut self, day: Weekday) -> bool {
        if self.is_day_complete(day) {
            return false;
        }
        self.completion.insert(day, true);
        true
    }
}

// ============================================================================
// Character Profile
// ============================================================================

/// The chosen avatar variant. Rendering-only: the progress engine never
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub gender: Gender,
}
