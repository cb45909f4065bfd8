//! Avatar selection service

use crate::error::ApiError;
use crate::state::AppState;
use crate::stores::{self, CharacterStore};
use fitquest_shared::models::{CharacterProfile, Gender};

/// Character service for the avatar choice
pub struct CharacterService;

impl CharacterService {
    /// Currently selected avatar, if one was ever chosen
    pub async fn get(state: &AppState) -> Option<CharacterProfile> {
        let data = state.data().read().await;
        CharacterStore::get(&data)
    }

    /// Select the avatar variant and persist the choice
    pub async fn select(state: &AppState, gender: Gender) -> Result<CharacterProfile, ApiError> {
        let mut data = state.data().write().await;
        CharacterStore::select(&mut data, gender);
        stores::persist(&data, state.storage()).map_err(ApiError::Internal)?;
        Ok(CharacterProfile { gender })
    }
}
