use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use time::{Duration, OffsetDateTime};

use super::{GameConfig, GamePhase, GameSession, DEBATE_GAME_TTL_SECONDS, GAME_TTL_SECONDS};
use crate::error::{GameError, GameResult};

/// Manager for all active games
#[derive(Debug)]
pub struct GameManager {
    /// Map of game_id to GameSession
    games: HashMap<String, GameSession>,
}

impl GameManager {
    /// Create a new game manager
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Start a new game with a unique ID
    ///
    /// # Returns
    ///
    /// The game_id of the newly created game
    ///
    /// # Errors
    ///
    /// Propagates `InvalidConfig` and `EmptyWordPool`; no game is stored on error
    pub fn create_game(
        &mut self,
        config: &GameConfig,
        words: Vec<String>,
        used_fallback_words: bool,
    ) -> GameResult<String> {
        let mut game_id = Self::generate_game_id();
        while self.games.contains_key(&game_id) {
            game_id = Self::generate_game_id();
        }

        let game = GameSession::start(game_id.clone(), config, words, used_fallback_words)?;
        self.games.insert(game_id.clone(), game);
        Ok(game_id)
    }

    /// Generate a URL-safe random game ID from the OS RNG
    ///
    /// 12 alphanumeric characters, about 71 bits of entropy
    fn generate_game_id() -> String {
        use rand::rngs::OsRng;

        OsRng
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect()
    }

    pub fn get_game(&self, game_id: &str) -> Option<&GameSession> {
        self.games.get(game_id)
    }

    pub fn get_game_mut(&mut self, game_id: &str) -> Option<&mut GameSession> {
        self.games.get_mut(game_id)
    }

    /// Look up a game, failing with `GameNotFound`
    pub fn game_mut(&mut self, game_id: &str) -> GameResult<&mut GameSession> {
        self.games.get_mut(game_id).ok_or(GameError::GameNotFound)
    }

    /// Discard a game and its session
    ///
    /// # Returns
    ///
    /// True if the game existed
    pub fn remove_game(&mut self, game_id: &str) -> bool {
        self.games.remove(game_id).is_some()
    }

    /// Remove games that are too old or idle in the debate phase
    ///
    /// # Returns
    ///
    /// Number of games cleaned up
    pub fn cleanup_stale_games(&mut self) -> usize {
        let now = OffsetDateTime::now_utc();
        let cutoff_time = now - Duration::seconds(GAME_TTL_SECONDS as i64);
        let debate_cutoff = now - Duration::seconds(DEBATE_GAME_TTL_SECONDS as i64);

        let before = self.games.len();
        self.games.retain(|_, game| {
            if game.created_at < cutoff_time {
                return false;
            }

            !matches!(game.debate_started_at, Some(started) if started < debate_cutoff)
        });

        before - self.games.len()
    }

    /// Get statistics about active games
    pub fn get_stats(&self) -> serde_json::Value {
        let total_players: usize = self
            .games
            .values()
            .map(|game| game.session().player_count())
            .sum();
        let revealing = self
            .games
            .values()
            .filter(|game| game.phase() == GamePhase::Reveal)
            .count();

        serde_json::json!({
            "total_games": self.games.len(),
            "revealing_games": revealing,
            "debating_games": self.games.len() - revealing,
            "total_players": total_players,
        })
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        vec!["Pizza".to_string(), "Sushi".to_string()]
    }

    fn create(manager: &mut GameManager) -> String {
        manager
            .create_game(&GameConfig::default(), words(), false)
            .unwrap()
    }

    #[test]
    fn test_create_game() {
        let mut manager = GameManager::new();

        let game_id = create(&mut manager);

        let game = manager.get_game(&game_id).unwrap();
        assert_eq!(game.game_id, game_id);
        assert_eq!(game.phase(), GamePhase::Reveal);
    }

    #[test]
    fn test_create_game_failure_stores_nothing() {
        let mut manager = GameManager::new();

        let result = manager.create_game(&GameConfig::default(), Vec::new(), false);

        assert!(matches!(result, Err(GameError::EmptyWordPool(_))));
        assert_eq!(manager.get_stats()["total_games"], 0);
    }

    #[test]
    fn test_get_nonexistent_game() {
        let mut manager = GameManager::new();

        assert!(manager.get_game("nonexistent").is_none());
        assert!(matches!(
            manager.game_mut("nonexistent"),
            Err(GameError::GameNotFound)
        ));
    }

    #[test]
    fn test_remove_game() {
        let mut manager = GameManager::new();
        let game_id = create(&mut manager);

        assert!(manager.remove_game(&game_id));
        assert!(manager.get_game(&game_id).is_none());
        assert!(!manager.remove_game(&game_id));
    }

    #[test]
    fn test_game_id_format() {
        let mut manager = GameManager::new();

        let game_id = create(&mut manager);
        let other_id = create(&mut manager);

        assert_eq!(game_id.len(), 12);
        assert!(game_id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(game_id, other_id);
    }

    #[test]
    fn test_get_stats() {
        let mut manager = GameManager::new();

        let stats = manager.get_stats();
        assert_eq!(stats["total_games"], 0);
        assert_eq!(stats["total_players"], 0);

        create(&mut manager);
        create(&mut manager);

        let stats = manager.get_stats();
        assert_eq!(stats["total_games"], 2);
        assert_eq!(stats["revealing_games"], 2);
        assert_eq!(stats["debating_games"], 0);
        assert_eq!(stats["total_players"], 8);
    }

    #[test]
    fn test_cleanup_stale_games() {
        let mut manager = GameManager::new();
        let game_id = create(&mut manager);

        if let Some(game) = manager.get_game_mut(&game_id) {
            game.created_at = OffsetDateTime::now_utc() - Duration::hours(2);
        }

        assert_eq!(manager.cleanup_stale_games(), 1);
        assert!(manager.get_game(&game_id).is_none());
    }

    #[test]
    fn test_cleanup_idle_debate_games() {
        let mut manager = GameManager::new();
        let game_id = create(&mut manager);

        if let Some(game) = manager.get_game_mut(&game_id) {
            game.debate_started_at = Some(OffsetDateTime::now_utc() - Duration::minutes(35));
        }

        assert_eq!(manager.cleanup_stale_games(), 1);
        assert!(manager.get_game(&game_id).is_none());
    }

    #[test]
    fn test_cleanup_keeps_recent_games() {
        let mut manager = GameManager::new();
        let game_id = create(&mut manager);

        assert_eq!(manager.cleanup_stale_games(), 0);
        assert!(manager.get_game(&game_id).is_some());
    }
}
