use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    core::{GameConfig, PREDEFINED_CATEGORIES},
    error::GameError,
    models::{
        CategoryResponse, ParseWordsRequest, ParsedWordsResponse, StartGameRequest,
        StartGameResponse,
    },
    state::AppState,
    words::parse_word_list,
};

/// List the predefined word categories
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryResponse> = PREDEFINED_CATEGORIES
        .iter()
        .map(|(name, words)| CategoryResponse {
            name: name.to_string(),
            word_count: words.len(),
        })
        .collect();

    Json(categories)
}

/// Get the saved configuration (defaults if none was saved)
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config_store.load().await)
}

/// Validate and save a configuration
///
/// # Returns
///
/// The saved configuration, or 400 if it is invalid
pub async fn update_config(
    State(state): State<AppState>,
    Json(config): Json<GameConfig>,
) -> Result<impl IntoResponse, GameError> {
    config.validate()?;
    state.config_store.save(&config).await?;
    Ok(Json(config))
}

/// Split uploaded text into a custom word list
pub async fn parse_words(Json(request): Json<ParseWordsRequest>) -> impl IntoResponse {
    Json(ParsedWordsResponse::new(parse_word_list(&request.text)))
}

/// Parse a start request; an empty body means "use the saved configuration"
fn parse_start_request(body: &[u8]) -> Result<StartGameRequest, GameError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StartGameRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| GameError::BadRequest(format!("Invalid start request: {}", e)))
}

/// Start a new game
///
/// Resolves the word pool (possibly calling the AI provider) before any game
/// exists, then assigns roles.
///
/// # Returns
///
/// 201 with the new game's ID, or 400 for a malformed body, an invalid config
/// or an empty word pool
pub async fn start_game(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GameError> {
    let request = parse_start_request(&body)?;

    let config = match &request.config {
        Some(config) => config.clone(),
        None => state.config_store.load().await,
    };
    config.validate()?;

    let resolved = state
        .word_provider
        .resolve(&config, &request.custom_list())
        .await?;
    let word_count = resolved.words.len();

    let game_id = {
        let mut manager = state.game_manager.write().await;
        manager.create_game(&config, resolved.words, resolved.used_fallback)?
    };

    if request.config.is_some() {
        if let Err(e) = state.config_store.save(&config).await {
            tracing::warn!("Game {} started but config was not saved: {}", game_id, e);
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(StartGameResponse {
            game_id,
            word_count,
            used_fallback_words: resolved.used_fallback,
        }),
    ))
}
