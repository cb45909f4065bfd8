//! Plan history store
//!
//! Saved plans live newest first; the head of the list is the plan the
//! dashboard shows. Completion state mutates in place, everything else on a
//! record is immutable once saved.

use super::AppData;
use chrono::NaiveDate;
use fitquest_shared::models::SavedPlanRecord;
use uuid::Uuid;

/// Plan history access
pub struct PlanStore;

impl PlanStore {
    /// All saved plans, most recent first
    pub fn list(data: &AppData) -> &[SavedPlanRecord] {
        &data.plans
    }

    /// Prepend a newly generated plan
    pub fn insert(data: &mut AppData, record: SavedPlanRecord) {
        data.plans.insert(0, record);
    }

    pub fn get(data: &AppData, id: Uuid) -> Option<&SavedPlanRecord> {
        data.plans.iter().find(|record| record.id == id)
    }

    pub fn get_mut(data: &mut AppData, id: Uuid) -> Option<&mut SavedPlanRecord> {
        data.plans.iter_mut().find(|record| record.id == id)
    }

    /// The most recently generated plan, if any
    pub fn latest(data: &AppData) -> Option<&SavedPlanRecord> {
        data.plans.first()
    }

    /// Weight captured at each plan generation, ordered by plan date.
    ///
    /// Plans sharing a date stay in the order they were generated, which a
    /// stable sort over the insertion-ordered history guarantees.
    pub fn weight_series(data: &AppData) -> Vec<(NaiveDate, f64)> {
        let mut points: Vec<(NaiveDate, f64)> = data
            .plans
            .iter()
            .rev()
            .map(|record| (record.date, record.profile.weight_kg))
            .collect();
        points.sort_by_key(|(date, _)| *date);
        points
    }

    pub fn clear(data: &mut AppData) {
        data.plans.clear();
    }
}
