//! Character profile store

use super::AppData;
use fitquest_shared::models::{CharacterProfile, Gender};

/// Avatar selection access
pub struct CharacterStore;

impl CharacterStore {
    pub fn get(data: &AppData) -> Option<CharacterProfile> {
        data.character
    }

    /// Choose (or switch) the avatar variant
    pub fn select(data: &mut AppData, gender: Gender) {
        data.character = Some(CharacterProfile { gender });
    }
}
