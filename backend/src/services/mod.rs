//! Business logic services
//!
//! Services validate input, sequence store mutations under the shared data
//! lock, and persist the full state before releasing it. Stores stay plain
//! data access; routes stay thin request translation.

pub mod activity;
pub mod character;
pub mod history;
pub mod plans;
pub mod stats;

pub use activity::ActivityService;
pub use character::CharacterService;
pub use history::HistoryService;
pub use plans::PlanService;
pub use stats::StatsService;

use chrono::{Local, NaiveDate};

/// Current local calendar day
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
