//! History management service

use crate::error::ApiError;
use crate::state::AppState;
use crate::stores::{self, ActivityLogStore, PlanStore};
use tracing::info;

/// History service for the full-clear operation
pub struct HistoryService;

impl HistoryService {
    /// Remove every logged activity and saved plan; the avatar choice is a
    /// setting rather than history and is left in place
    pub async fn clear_all(state: &AppState) -> Result<(), ApiError> {
        let mut data = state.data().write().await;
        ActivityLogStore::clear(&mut data);
        PlanStore::clear(&mut data);
        stores::persist(&data, state.storage()).map_err(ApiError::Internal)?;
        info!("History cleared");
        Ok(())
    }
}
