use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{assign_roles, Advance, GameConfig, Player, RevealAction, RevealFlow, Session};
use crate::error::{GameError, GameResult};

/// Which screen the shared device should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Reveal,
    Debate,
}

/// Materialize player roles for a configuration and word pool
///
/// This is the only way a [`Session`] is created.
pub fn start_session(config: &GameConfig, words: &[String]) -> GameResult<Session> {
    assign_roles(config, words)
}

/// One game running on a shared device
///
/// Owns the current [`Session`] and the reveal progress through it. While
/// `reveal` is `Some` players are taking turns; `None` means the debate phase.
#[derive(Debug)]
pub struct GameSession {
    /// Unique identifier for this game
    pub game_id: String,
    session: Session,
    /// Word pool kept for restarts
    words: Vec<String>,
    reveal: Option<RevealFlow>,
    /// Whether the words came from the fallback list instead of the AI provider
    pub used_fallback_words: bool,
    /// Number of sessions played, including the current one
    pub round: u32,
    /// When the game was created
    pub created_at: OffsetDateTime,
    /// When the current round entered the debate phase
    pub debate_started_at: Option<OffsetDateTime>,
}

impl GameSession {
    /// Start a game by assigning roles over the given word pool
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` or `EmptyWordPool`; nothing is created on error
    pub fn start(
        game_id: String,
        config: &GameConfig,
        words: Vec<String>,
        used_fallback_words: bool,
    ) -> GameResult<Self> {
        let session = start_session(config, &words)?;
        let reveal = Some(RevealFlow::new(session.player_count()));

        tracing::info!(
            "Game {} started with {} players and {} impostors",
            game_id,
            config.player_count,
            config.impostor_count
        );

        Ok(Self {
            game_id,
            session,
            words,
            reveal,
            used_fallback_words,
            round: 1,
            created_at: OffsetDateTime::now_utc(),
            debate_started_at: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        self.session.config()
    }

    pub fn phase(&self) -> GamePhase {
        if self.reveal.is_some() {
            GamePhase::Reveal
        } else {
            GamePhase::Debate
        }
    }

    /// Reveal progress, or None during the debate phase
    pub fn reveal_flow(&self) -> Option<&RevealFlow> {
        self.reveal.as_ref()
    }

    /// The player whose secret may be displayed right now
    pub fn visible_player(&self) -> Option<&Player> {
        self.reveal
            .as_ref()
            .and_then(RevealFlow::visible_player_index)
            .and_then(|index| self.session.player(index))
    }

    pub fn confirm_identity(&mut self) -> GameResult<()> {
        self.apply(RevealAction::ConfirmIdentity).map(|_| ())
    }

    pub fn reveal(&mut self) -> GameResult<()> {
        self.apply(RevealAction::Reveal).map(|_| ())
    }

    /// Acknowledge the shown secret; enters the debate phase after the last player
    pub fn acknowledge(&mut self) -> GameResult<GamePhase> {
        self.apply(RevealAction::Acknowledge)
    }

    /// Apply a reveal action and return the resulting phase
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` if the action does not fit the current stage
    /// and `DebateInProgress` once every player has seen their secret
    pub fn apply(&mut self, action: RevealAction) -> GameResult<GamePhase> {
        let flow = self
            .reveal
            .as_mut()
            .ok_or(GameError::DebateInProgress(action))?;

        match flow.apply(action)? {
            Some(Advance::Debate) => {
                self.reveal = None;
                self.debate_started_at = Some(OffsetDateTime::now_utc());
                tracing::info!("Game {} entered the debate phase", self.game_id);
            }
            Some(Advance::NextPlayer(index)) => {
                tracing::debug!("Game {}: device passed to player {}", self.game_id, index);
            }
            None => {}
        }

        Ok(self.phase())
    }

    /// Play again with the same configuration and word pool
    ///
    /// Draws a fresh random session and resets the reveal to the first player.
    ///
    /// # Errors
    ///
    /// Returns `RevealInProgress` unless the game is in the debate phase
    pub fn restart(&mut self) -> GameResult<()> {
        if self.phase() != GamePhase::Debate {
            return Err(GameError::RevealInProgress);
        }

        let config = self.session.config().clone();
        self.session = start_session(&config, &self.words)?;
        self.reveal = Some(RevealFlow::new(self.session.player_count()));
        self.debate_started_at = None;
        self.round += 1;

        tracing::info!("Game {} restarted (round {})", self.game_id, self.round);
        Ok(())
    }

    /// Get the state the shared device may display
    ///
    /// Role and word are included only for the player currently viewing.
    pub fn get_state(&self) -> serde_json::Value {
        let mut state = serde_json::json!({
            "game_id": self.game_id,
            "phase": self.phase(),
            "round": self.round,
            "player_count": self.session.player_count(),
            "impostor_count": self.config().impostor_count,
            "used_fallback_words": self.used_fallback_words,
        });

        if let Some(flow) = &self.reveal {
            state["current_player_index"] = serde_json::json!(flow.current_player_index());
            state["stage"] = serde_json::json!(flow.stage());
        }

        if let Some(player) = self.visible_player() {
            state["player"] = player.to_dict(true);
        }

        state
    }
}
