//! In-memory stores persisted through the storage backend
//!
//! All user state lives in a single [`AppData`] value behind the
//! application's write lock. Store types mutate it in memory; services call
//! [`persist`] after each mutation so a restart reloads the same state.

pub mod activity;
pub mod character;
pub mod plans;

pub use activity::ActivityLogStore;
pub use character::CharacterStore;
pub use plans::PlanStore;

use crate::storage::StorageBackend;
use anyhow::{Context, Result};
use fitquest_shared::models::{ActivityEntry, CharacterProfile, SavedPlanRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Storage key for the activity log document
pub const ACTIVITY_LOG_KEY: &str = "activity_log";
/// Storage key for the plan history document
pub const PLAN_HISTORY_KEY: &str = "plan_history";
/// Storage key for the character profile document
pub const CHARACTER_KEY: &str = "character_profile";

/// The complete persisted application state
#[derive(Debug, Clone, Default)]
pub struct AppData {
    /// Activity log, most recent first
    pub activities: Vec<ActivityEntry>,
    /// Plan history, most recent first
    pub plans: Vec<SavedPlanRecord>,
    pub character: Option<CharacterProfile>,
}

/// Result of loading persisted state at startup
pub struct LoadedData {
    pub data: AppData,
    /// True when corrupt documents forced a reset to an empty state
    pub recovered: bool,
}

enum Loaded<T> {
    Missing,
    Corrupt,
    Value(T),
}

impl<T> Loaded<T> {
    fn is_corrupt(&self) -> bool {
        matches!(self, Loaded::Corrupt)
    }

    fn into_value(self) -> Option<T> {
        match self {
            Loaded::Value(value) => Some(value),
            Loaded::Missing | Loaded::Corrupt => None,
        }
    }
}

/// Load all persisted documents.
///
/// A document that fails to parse marks the whole state corrupt: all three
/// documents reset together and the result is an empty state with
/// `recovered` set. The caller persists the empty state to replace the bad
/// documents.
pub fn load(storage: &dyn StorageBackend) -> Result<LoadedData> {
    let activities = load_document::<Vec<ActivityEntry>>(storage, ACTIVITY_LOG_KEY)?;
    let plans = load_document::<Vec<SavedPlanRecord>>(storage, PLAN_HISTORY_KEY)?;
    let character = load_document::<CharacterProfile>(storage, CHARACTER_KEY)?;

    if activities.is_corrupt() || plans.is_corrupt() || character.is_corrupt() {
        warn!("Corrupt persisted state detected; resetting to an empty state");
        return Ok(LoadedData {
            data: AppData::default(),
            recovered: true,
        });
    }

    Ok(LoadedData {
        data: AppData {
            activities: activities.into_value().unwrap_or_default(),
            plans: plans.into_value().unwrap_or_default(),
            character: character.into_value(),
        },
        recovered: false,
    })
}

/// Write every document back to storage
pub fn persist(data: &AppData, storage: &dyn StorageBackend) -> Result<()> {
    persist_document(storage, ACTIVITY_LOG_KEY, &data.activities)?;
    persist_document(storage, PLAN_HISTORY_KEY, &data.plans)?;
    match &data.character {
        Some(character) => persist_document(storage, CHARACTER_KEY, character)?,
        None => storage.remove(CHARACTER_KEY)?,
    }
    Ok(())
}

fn load_document<T: DeserializeOwned>(
    storage: &dyn StorageBackend,
    key: &str,
) -> Result<Loaded<T>> {
    match storage.get(key)? {
        None => Ok(Loaded::Missing),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(Loaded::Value(value)),
            Err(err) => {
                warn!(key, error = %err, "Persisted document failed to parse");
                Ok(Loaded::Corrupt)
            }
        },
    }
}

fn persist_document<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw =
        serde_json::to_string(value).with_context(|| format!("failed to serialize {key}"))?;
    storage.set(key, &raw)
}
