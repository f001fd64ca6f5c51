use serde::Serialize;

use super::{GameConfig, Player};

/// One round of assigned roles: the shared word plus every player's secret
///
/// Built only by [`assign_roles`](super::assign_roles); immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    word: String,
    players: Vec<Player>,
    config: GameConfig,
}

impl Session {
    pub(crate) fn new(word: String, players: Vec<Player>, config: GameConfig) -> Self {
        Self {
            word,
            players,
            config,
        }
    }

    /// The citizens' secret word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Configuration snapshot the session was created from
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seats of the impostors, in ascending order
    pub fn impostor_ids(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.is_impostor())
            .map(|p| p.id)
            .collect()
    }
}
