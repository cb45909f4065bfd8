//! Avatar selection API routes

use crate::error::ApiError;
use crate::services::CharacterService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitquest_shared::types::{CharacterResponse, SelectCharacterRequest};

/// Create character routes
pub fn character_routes() -> Router<AppState> {
    Router::new().route("/", get(get_character).put(select_character))
}

/// GET /api/v1/character - Currently selected avatar
async fn get_character(State(state): State<AppState>) -> Json<CharacterResponse> {
    let character = CharacterService::get(&state).await;
    Json(CharacterResponse {
        gender: character.map(|c| c.gender),
    })
}

/// PUT /api/v1/character - Select the avatar variant
async fn select_character(
    State(state): State<AppState>,
    Json(req): Json<SelectCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let selected = CharacterService::select(&state, req.gender).await?;
    Ok(Json(CharacterResponse {
        gender: Some(selected.gender),
    }))
}
