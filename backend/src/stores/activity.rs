//! Activity log store
//!
//! Append-only log of workouts and water intakes, newest first. Entries are
//! immutable once logged; only a full history clear removes them.

use super::AppData;
use chrono::NaiveDate;
use fitquest_shared::models::ActivityEntry;
use fitquest_shared::progress;

/// Activity log access
pub struct ActivityLogStore;

impl ActivityLogStore {
    /// All entries, most recent first
    pub fn list(data: &AppData) -> &[ActivityEntry] {
        &data.activities
    }

    /// Workout entries only, newest date first
    ///
    /// Entries sharing a date keep their log order; display order and the
    /// leveling computation never depend on each other.
    pub fn workouts(data: &AppData) -> Vec<&ActivityEntry> {
        let mut workouts: Vec<&ActivityEntry> = data
            .activities
            .iter()
            .filter(|entry| entry.is_workout())
            .collect();
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        workouts
    }

    /// Prepend a new entry
    pub fn insert(data: &mut AppData, entry: ActivityEntry) {
        data.activities.insert(0, entry);
    }

    /// Total water logged on one calendar day, in ml
    pub fn water_total_ml(data: &AppData, date: NaiveDate) -> u64 {
        data.activities
            .iter()
            .filter(|entry| entry.date == date)
            .filter_map(|entry| entry.amount_ml())
            .map(u64::from)
            .sum()
    }

    /// Total water ever logged, in ml
    pub fn lifetime_water_ml(data: &AppData) -> u64 {
        data.activities
            .iter()
            .filter_map(|entry| entry.amount_ml())
            .map(u64::from)
            .sum()
    }

    /// Distinct workout days, feeding the leveling engine
    pub fn active_days(data: &AppData) -> u32 {
        progress::count_active_days(&data.activities)
    }

    pub fn clear(data: &mut AppData) {
        data.activities.clear();
    }
}
