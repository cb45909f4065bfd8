//! Quest progress engine
//!
//! Pure leveling and hydration-goal calculations driven by the activity log.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No clocks, no storage, no side effects
//! 2. **Distinct Days**: A calendar day with at least one workout counts once,
//!    no matter how many workouts it holds
//! 3. **Water Is Neutral**: Water intake entries never move the level

use crate::models::ActivityEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct workout days required to advance one level
pub const DAYS_PER_LEVEL: u32 = 5;

/// Daily water goal in ml when no plan recommends one
pub const DEFAULT_WATER_GOAL_ML: u32 = 3000;

// ============================================================================
// Leveling
// ============================================================================

/// Character level derived from the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Current level, starting at 1
    pub level: u32,
    /// Distinct calendar days with at least one workout
    pub active_days: u32,
    /// Active days accumulated toward the next level (0..DAYS_PER_LEVEL)
    pub progress: u32,
    pub days_per_level: u32,
    /// Additional active days needed to reach the next level
    pub days_until_next_level: u32,
}

/// Count distinct calendar days carrying at least one workout entry.
///
/// Water intake entries are ignored entirely.
pub fn count_active_days(entries: &[ActivityEntry]) -> u32 {
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|entry| entry.is_workout())
        .map(|entry| entry.date)
        .collect();
    days.len() as u32
}

/// Level for a given number of active days
///
/// Formula: level = active_days / DAYS_PER_LEVEL + 1
pub fn level_for_active_days(active_days: u32) -> u32 {
    active_days / DAYS_PER_LEVEL + 1
}

/// Active days accumulated toward the next level
pub fn progress_in_level(active_days: u32) -> u32 {
    active_days % DAYS_PER_LEVEL
}

/// Active days still missing for the next level
pub fn days_until_next_level(active_days: u32) -> u32 {
    DAYS_PER_LEVEL - progress_in_level(active_days)
}

/// Calculate complete level state from the activity log
pub fn level_info(entries: &[ActivityEntry]) -> LevelInfo {
    let active_days = count_active_days(entries);
    LevelInfo {
        level: level_for_active_days(active_days),
        active_days,
        progress: progress_in_level(active_days),
        days_per_level: DAYS_PER_LEVEL,
        days_until_next_level: days_until_next_level(active_days),
    }
}

/// Compare active-day counts before and after a mutation and report the new
/// level when a boundary was crossed. `None` means no level change.
pub fn detect_level_up(active_days_before: u32, active_days_after: u32) -> Option<u32> {
    let before = level_for_active_days(active_days_before);
    let after = level_for_active_days(active_days_after);
    (after > before).then_some(after)
}

// ============================================================================
// Hydration Goal
// ============================================================================

/// Daily water goal in ml derived from a plan's recommendation in liters.
///
/// Falls back to [`DEFAULT_WATER_GOAL_ML`] when no plan exists or the
/// recommendation is unusable.
pub fn water_goal_ml(recommended_l: Option<f64>) -> u32 {
    match recommended_l {
        Some(liters) if liters.is_finite() && liters > 0.0 => (liters * 1000.0).round() as u32,
        _ => DEFAULT_WATER_GOAL_ML,
    }
}
