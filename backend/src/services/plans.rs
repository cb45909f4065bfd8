//! Plan generation and completion service
//!
//! Provides business logic for the plan history including:
//! - Profile validation and plan generation through the configured provider
//! - Saving generated plans most-recent-first
//! - Day completion, which marks the plan and logs the matching workout as
//!   one sequenced operation

use crate::error::ApiError;
use crate::state::AppState;
use crate::stores::{self, ActivityLogStore, PlanStore};
use fitquest_shared::models::{
    ActivityDetails, ActivityEntry, Intensity, SavedPlanRecord, UserProfile, Weekday,
};
use fitquest_shared::progress;
use fitquest_shared::types::LevelUpNotification;
use fitquest_shared::validation;
use tracing::info;
use uuid::Uuid;

/// Duration recorded for a workout logged through day completion. Real
/// duration and intensity of the planned session are not tracked, so the
/// logged entry carries this fixed approximation.
const COMPLETION_DURATION_MINUTES: u32 = 60;

/// Outcome of a completion request
#[derive(Debug, Clone)]
pub struct CompletedDay {
    /// False when the request changed nothing (unknown plan, or the day was
    /// already complete)
    pub completed: bool,
    pub entry: Option<ActivityEntry>,
    pub level_up: Option<LevelUpNotification>,
}

impl CompletedDay {
    fn noop() -> Self {
        Self {
            completed: false,
            entry: None,
            level_up: None,
        }
    }
}

/// Plan service for business logic
pub struct PlanService;

impl PlanService {
    /// Generate a plan for the profile and prepend it to history
    ///
    /// Generation runs before the data lock is taken, so a slow model call
    /// never blocks reads or other mutations. Nothing is saved when
    /// generation or schema validation fails.
    pub async fn generate_and_save(
        state: &AppState,
        profile: UserProfile,
    ) -> Result<SavedPlanRecord, ApiError> {
        validation::validate_profile(&profile).map_err(ApiError::Validation)?;

        let plan = state.generator().generate(&profile).await?;

        let record = SavedPlanRecord::new(super::local_today(), profile, plan);
        let mut data = state.data().write().await;
        PlanStore::insert(&mut data, record.clone());
        stores::persist(&data, state.storage()).map_err(ApiError::Internal)?;

        info!(plan_id = %record.id, "Generated plan saved");
        Ok(record)
    }

    /// Saved plans, most recent first
    pub async fn history(state: &AppState) -> Vec<SavedPlanRecord> {
        let data = state.data().read().await;
        PlanStore::list(&data).to_vec()
    }

    /// Mark one weekday of a saved plan complete and log the workout it
    /// represents.
    ///
    /// An unknown plan id or an already-complete day is a silent no-op: the
    /// outcome reports `completed: false` and no entry is written. A rest day
    /// completes like any other day and logs the fallback label. The flag
    /// update and the log append happen under one lock hold and one persist.
    pub async fn complete_day(
        state: &AppState,
        plan_id: Uuid,
        day: Weekday,
    ) -> Result<CompletedDay, ApiError> {
        let mut data = state.data().write().await;

        let Some(record) = PlanStore::get_mut(&mut data, plan_id) else {
            return Ok(CompletedDay::noop());
        };
        if !record.mark_day_complete(day) {
            return Ok(CompletedDay::noop());
        }
        let label = record.plan.workout_label(day);

        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            date: super::local_today(),
            notes: Some(format!("Completed {day} from saved plan")),
            details: ActivityDetails::Workout {
                activity_type: label,
                duration_minutes: COMPLETION_DURATION_MINUTES,
                intensity: Intensity::Medium,
            },
        };

        let days_before = ActivityLogStore::active_days(&data);
        ActivityLogStore::insert(&mut data, entry.clone());
        let days_after = ActivityLogStore::active_days(&data);
        stores::persist(&data, state.storage()).map_err(ApiError::Internal)?;
        drop(data);

        let level_up = progress::detect_level_up(days_before, days_after).map(|new_level| {
            info!(new_level, "Level up");
            LevelUpNotification { new_level }
        });

        Ok(CompletedDay {
            completed: true,
            entry: Some(entry),
            level_up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::generation::{DisabledPlanGenerator, GenerationError, PlanGenerator};
    use crate::storage::MemoryStorage;
    use crate::stores::{AppData, PLAN_HISTORY_KEY};
    use async_trait::async_trait;
    use fitquest_shared::models::{
        ActivityLevel, DayMeals, FitnessGoal, Gender, GeneratedPlan,
    };
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct StubPlanGenerator;

    #[async_trait]
    impl PlanGenerator for StubPlanGenerator {
        async fn generate(&self, _profile: &UserProfile) -> Result<GeneratedPlan, GenerationError> {
            Ok(sample_plan())
        }
    }

    fn sample_plan() -> GeneratedPlan {
        let mut workout_plan = BTreeMap::new();
        let mut diet_plan = BTreeMap::new();
        for day in Weekday::ALL {
            workout_plan.insert(day, vec!["Push-ups (3x12)".to_string()]);
            diet_plan.insert(day, DayMeals::default());
        }
        // Sunday is the rest day
        workout_plan.insert(Weekday::Sunday, Vec::new());

        GeneratedPlan {
            summary: "Stay consistent and hydrate".to_string(),
            workout_plan,
            diet_plan,
            recommended_water_l: 3.5,
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Female,
            weight_kg: 65.0,
            height_cm: 170.0,
            activity_level: ActivityLevel::LightlyActive,
            fitness_goal: FitnessGoal::GeneralFitness,
            timeframe_weeks: 8,
            target_language: "English".to_string(),
            water_intake_l: 2.0,
            preferred_foods: None,
        }
    }

    fn state_with_generator(generator: Arc<dyn PlanGenerator>) -> AppState {
        AppState::new(
            AppData::default(),
            Arc::new(MemoryStorage::new()),
            generator,
            AppConfig::default(),
            false,
        )
    }

    async fn seed_plan(state: &AppState) -> Uuid {
        let record = SavedPlanRecord::new(
            "2025-03-01".parse().unwrap(),
            sample_profile(),
            sample_plan(),
        );
        let id = record.id;
        let mut data = state.data().write().await;
        PlanStore::insert(&mut data, record);
        id
    }

    #[tokio::test]
    async fn test_generate_and_save_prepends_record() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let record = PlanService::generate_and_save(&state, sample_profile())
            .await
            .unwrap();

        assert!(record.completion.is_empty());
        assert_eq!(record.plan.recommended_water_l, 3.5);

        let history = PlanService::history(&state).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
        assert!(state
            .storage()
            .get(PLAN_HISTORY_KEY)
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_profile() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let mut profile = sample_profile();
        profile.age = 5;

        let result = PlanService::generate_and_save(&state, profile).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(PlanService::history(&state).await.is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_saves_nothing() {
        let state = state_with_generator(Arc::new(DisabledPlanGenerator));
        let result = PlanService::generate_and_save(&state, sample_profile()).await;

        assert!(matches!(result, Err(ApiError::Generation(_))));
        assert!(PlanService::history(&state).await.is_empty());
        assert!(state.storage().get(PLAN_HISTORY_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_complete_day_logs_matching_workout() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let plan_id = seed_plan(&state).await;

        let outcome = PlanService::complete_day(&state, plan_id, Weekday::Monday)
            .await
            .unwrap();

        assert!(outcome.completed);
        let entry = outcome.entry.unwrap();
        assert_eq!(entry.activity_type(), Some("Push-ups"));
        assert!(entry.notes.as_deref().unwrap().contains("Monday"));
        match entry.details {
            ActivityDetails::Workout {
                duration_minutes,
                intensity,
                ..
            } => {
                assert_eq!(duration_minutes, 60);
                assert_eq!(intensity, Intensity::Medium);
            }
            ActivityDetails::WaterIntake { .. } => panic!("expected workout entry"),
        }

        let data = state.data().read().await;
        assert!(PlanStore::get(&data, plan_id)
            .unwrap()
            .is_day_complete(Weekday::Monday));
        assert_eq!(ActivityLogStore::list(&data).len(), 1);
    }

    #[tokio::test]
    async fn test_complete_day_is_idempotent() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let plan_id = seed_plan(&state).await;

        let first = PlanService::complete_day(&state, plan_id, Weekday::Tuesday)
            .await
            .unwrap();
        let second = PlanService::complete_day(&state, plan_id, Weekday::Tuesday)
            .await
            .unwrap();

        assert!(first.completed);
        assert!(!second.completed);
        assert!(second.entry.is_none());

        let data = state.data().read().await;
        assert!(PlanStore::get(&data, plan_id)
            .unwrap()
            .is_day_complete(Weekday::Tuesday));
        assert_eq!(ActivityLogStore::list(&data).len(), 1);
    }

    #[tokio::test]
    async fn test_complete_unknown_plan_is_noop() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        seed_plan(&state).await;

        let outcome = PlanService::complete_day(&state, Uuid::new_v4(), Weekday::Monday)
            .await
            .unwrap();

        assert!(!outcome.completed);
        let data = state.data().read().await;
        assert!(ActivityLogStore::list(&data).is_empty());
        assert!(!PlanStore::list(&data)[0].is_day_complete(Weekday::Monday));
    }

    #[tokio::test]
    async fn test_rest_day_completion_uses_fallback_label() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let plan_id = seed_plan(&state).await;

        let outcome = PlanService::complete_day(&state, plan_id, Weekday::Sunday)
            .await
            .unwrap();

        assert!(outcome.completed);
        let entry = outcome.entry.unwrap();
        assert_eq!(entry.activity_type(), Some("Planned Workout"));
        match entry.details {
            ActivityDetails::Workout {
                duration_minutes,
                intensity,
                ..
            } => {
                assert_eq!(duration_minutes, 60);
                assert_eq!(intensity, Intensity::Medium);
            }
            ActivityDetails::WaterIntake { .. } => panic!("expected workout entry"),
        }
    }

    #[tokio::test]
    async fn test_completion_counts_toward_level() {
        let state = state_with_generator(Arc::new(StubPlanGenerator));
        let plan_id = seed_plan(&state).await;

        // Four past workout days; today's completion is the fifth
        {
            let mut data = state.data().write().await;
            for day in 1..=4 {
                ActivityLogStore::insert(
                    &mut data,
                    ActivityEntry {
                        id: Uuid::new_v4(),
                        date: format!("2020-01-0{day}").parse().unwrap(),
                        notes: None,
                        details: ActivityDetails::Workout {
                            activity_type: "Rowing".to_string(),
                            duration_minutes: 20,
                            intensity: Intensity::Low,
                        },
                    },
                );
            }
        }

        let outcome = PlanService::complete_day(&state, plan_id, Weekday::Wednesday)
            .await
            .unwrap();
        assert_eq!(outcome.level_up.unwrap().new_level, 2);
    }
}
