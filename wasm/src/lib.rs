//! FitQuest WASM Module
//!
//! This crate provides WebAssembly bindings over the shared leveling math so
//! the browser can render the level and hydration widgets without a backend
//! round trip.

use fitquest_shared::progress;
use wasm_bindgen::prelude::*;

/// Current level for a count of distinct workout days
#[wasm_bindgen]
pub fn level_for_active_days(active_days: u32) -> u32 {
    progress::level_for_active_days(active_days)
}

/// Active days accumulated toward the next level
#[wasm_bindgen]
pub fn progress_in_level(active_days: u32) -> u32 {
    progress::progress_in_level(active_days)
}

/// Active days still missing for the next level
#[wasm_bindgen]
pub fn days_until_next_level(active_days: u32) -> u32 {
    progress::days_until_next_level(active_days)
}

/// Fill ratio for the level progress bar, 0.0 to 100.0
#[wasm_bindgen]
pub fn level_progress_percent(active_days: u32) -> f64 {
    f64::from(progress::progress_in_level(active_days)) / f64::from(progress::DAYS_PER_LEVEL)
        * 100.0
}

/// Distinct workout days required to advance one level
#[wasm_bindgen]
pub fn days_per_level() -> u32 {
    progress::DAYS_PER_LEVEL
}

/// Daily water goal in ml for a plan recommendation in liters.
///
/// Pass `undefined` when no plan has been generated yet; the standard goal
/// applies.
#[wasm_bindgen]
pub fn water_goal_ml(recommended_l: Option<f64>) -> u32 {
    progress::water_goal_ml(recommended_l)
}

/// Complete level state as a JSON string, for populating the level widget
/// with one call
#[wasm_bindgen]
pub fn level_summary_json(active_days: u32) -> String {
    let info = progress::LevelInfo {
        level: progress::level_for_active_days(active_days),
        active_days,
        progress: progress::progress_in_level(active_days),
        days_per_level: progress::DAYS_PER_LEVEL,
        days_until_next_level: progress::days_until_next_level(active_days),
    };
    serde_json::to_string(&info).unwrap_or_default()
}
