use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{core::RevealAction, error::GameError, state::AppState};

/// Get the current screen for a game
///
/// The role and word are only present while the current player is viewing.
pub async fn get_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    let manager = state.game_manager.read().await;
    let game = manager.get_game(&game_id).ok_or(GameError::GameNotFound)?;
    Ok(Json(game.get_state()))
}

/// Apply one reveal action and return the new screen
async fn apply_action(
    state: AppState,
    game_id: String,
    action: RevealAction,
) -> Result<Json<serde_json::Value>, GameError> {
    let mut manager = state.game_manager.write().await;
    let game = manager.game_mut(&game_id)?;
    game.apply(action)?;
    Ok(Json(game.get_state()))
}

/// The player holding the device confirms who they are
pub async fn confirm_identity(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    apply_action(state, game_id, RevealAction::ConfirmIdentity).await
}

/// Show the confirmed player their secret
pub async fn reveal(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    apply_action(state, game_id, RevealAction::Reveal).await
}

/// Hide the secret and pass the device on
pub async fn acknowledge(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    apply_action(state, game_id, RevealAction::Acknowledge).await
}

/// Play another round with the same configuration
pub async fn restart_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    let mut manager = state.game_manager.write().await;
    let game = manager.game_mut(&game_id)?;
    game.restart()?;
    Ok(Json(game.get_state()))
}

/// Discard a game and return to configuration
pub async fn discard_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GameError> {
    let mut manager = state.game_manager.write().await;
    if !manager.remove_game(&game_id) {
        return Err(GameError::GameNotFound);
    }

    tracing::info!("Game {} discarded", game_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Statistics about running games
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let manager = state.game_manager.read().await;
    Json(manager.get_stats())
}
