//! Application state management
//!
//! All user data lives in a single [`AppData`] value behind one `RwLock`.
//! Mutations take the write half, so a cross-store operation (for example
//! marking a plan day complete and logging the matching workout) is observed
//! either fully applied or not at all. Reads share the read half.

use crate::config::AppConfig;
use crate::generation::PlanGenerator;
use crate::storage::StorageBackend;
use crate::stores::AppData;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    data: Arc<RwLock<AppData>>,
    storage: Arc<dyn StorageBackend>,
    generator: Arc<dyn PlanGenerator>,
    config: Arc<AppConfig>,
    recovered: bool,
}

impl AppState {
    pub fn new(
        data: AppData,
        storage: Arc<dyn StorageBackend>,
        generator: Arc<dyn PlanGenerator>,
        config: AppConfig,
        recovered: bool,
    ) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
            storage,
            generator,
            config: Arc::new(config),
            recovered,
        }
    }

    /// In-memory stores, guarded by the single data lock
    #[inline]
    pub fn data(&self) -> &RwLock<AppData> {
        &self.data
    }

    /// Durable key-value storage
    #[inline]
    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Plan generation provider
    #[inline]
    pub fn generator(&self) -> &dyn PlanGenerator {
        self.generator.as_ref()
    }

    /// Application configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// True when startup found unreadable persisted state and reset it
    #[inline]
    pub fn recovered(&self) -> bool {
        self.recovered
    }
}
