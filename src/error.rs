use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::{RevealAction, RevealStage};

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A configuration invariant is violated; blocks the session from starting
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The selected word source produced no words
    #[error("No words available: {0}")]
    EmptyWordPool(String),

    /// Network or parse failure while fetching AI words; recovered by the fallback list
    #[error("Word provider failed: {0}")]
    WordProvider(String),

    /// A reveal action was invoked in a stage that does not permit it
    #[error("Cannot {action} while {stage}")]
    IllegalTransition {
        action: RevealAction,
        stage: RevealStage,
    },

    /// The reveal flow is over and the game is in the debate phase
    #[error("Cannot {0} during the debate phase")]
    DebateInProgress(RevealAction),

    /// Restart requested before every player has seen their secret
    #[error("Cannot restart before the reveal is finished")]
    RevealInProgress,

    /// The request body could not be understood
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Game not found")]
    GameNotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl GameError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::InvalidConfig(_)
            | GameError::EmptyWordPool(_)
            | GameError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GameError::IllegalTransition { .. }
            | GameError::DebateInProgress(_)
            | GameError::RevealInProgress => StatusCode::CONFLICT,
            GameError::GameNotFound => StatusCode::NOT_FOUND,
            GameError::WordProvider(_) => StatusCode::BAD_GATEWAY,
            GameError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Out-of-turn reveal actions mean the front end is out of sync
        if status == StatusCode::CONFLICT {
            tracing::error!("Reveal flow contract violation: {}", self);
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GameError::InvalidConfig("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GameError::EmptyWordPool("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GameError::IllegalTransition {
                action: RevealAction::Reveal,
                stage: RevealStage::WaitingForPlayer,
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GameError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GameError::GameNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_illegal_transition_message() {
        let err = GameError::IllegalTransition {
            action: RevealAction::Reveal,
            stage: RevealStage::WaitingForPlayer,
        };
        assert_eq!(err.to_string(), "Cannot reveal while waiting for player");
    }
}
