//! Activity logging service
//!
//! Provides business logic for the activity log including:
//! - Validated logging of workouts and water intake
//! - Level-up detection when a workout reaches a new distinct-day threshold
//! - Read views over the log

use crate::error::ApiError;
use crate::state::AppState;
use crate::stores::{self, ActivityLogStore};
use fitquest_shared::models::{ActivityDetails, ActivityEntry};
use fitquest_shared::progress;
use fitquest_shared::types::{LevelUpNotification, LogActivityRequest};
use fitquest_shared::validation;
use tracing::info;
use uuid::Uuid;

/// Outcome of logging one entry
#[derive(Debug, Clone)]
pub struct LoggedActivity {
    pub entry: ActivityEntry,
    pub level_up: Option<LevelUpNotification>,
}

/// Activity service for business logic
pub struct ActivityService;

impl ActivityService {
    /// Validate and append a new log entry, reporting any level-up it caused
    ///
    /// The entry date defaults to the server's local day when the client does
    /// not supply one. Only a workout entry may report a level-up: the guard
    /// is on the entry kind, not just the recomputed level delta.
    pub async fn log(
        state: &AppState,
        request: LogActivityRequest,
    ) -> Result<LoggedActivity, ApiError> {
        Self::validate(&request)?;

        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            date: request.date.unwrap_or_else(super::local_today),
            notes: request.notes,
            details: request.details,
        };

        let mut data = state.data().write().await;
        let days_before = ActivityLogStore::active_days(&data);
        ActivityLogStore::insert(&mut data, entry.clone());
        let days_after = ActivityLogStore::active_days(&data);
        stores::persist(&data, state.storage()).map_err(ApiError::Internal)?;
        drop(data);

        let level_up = if entry.is_workout() {
            progress::detect_level_up(days_before, days_after).map(|new_level| {
                info!(new_level, "Level up");
                LevelUpNotification { new_level }
            })
        } else {
            None
        };

        Ok(LoggedActivity { entry, level_up })
    }

    /// All entries, most recent first
    pub async fn list(state: &AppState) -> Vec<ActivityEntry> {
        let data = state.data().read().await;
        ActivityLogStore::list(&data).to_vec()
    }

    /// Workout entries only, newest date first
    pub async fn recent_workouts(state: &AppState) -> Vec<ActivityEntry> {
        let data = state.data().read().await;
        ActivityLogStore::workouts(&data)
            .into_iter()
            .cloned()
            .collect()
    }

    fn validate(request: &LogActivityRequest) -> Result<(), ApiError> {
        match &request.details {
            ActivityDetails::Workout {
                activity_type,
                duration_minutes,
                ..
            } => {
                validation::validate_activity_type(activity_type).map_err(ApiError::Validation)?;
                validation::validate_duration_minutes(*duration_minutes)
                    .map_err(ApiError::Validation)?;
            }
            ActivityDetails::WaterIntake { amount_ml } => {
                validation::validate_water_amount_ml(*amount_ml).map_err(ApiError::Validation)?;
            }
        }

        if let Some(notes) = &request.notes {
            validation::validate_notes(notes).map_err(ApiError::Validation)?;
        }

        Ok(())
    }
}
