use serde::{Deserialize, Serialize};

use super::{category_words, DEFAULT_CATEGORY, MAX_PLAYERS, MIN_IMPOSTORS, MIN_PLAYERS};
use crate::error::{GameError, GameResult};

/// Where the secret words for a game come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordSource {
    /// A built-in category table
    Predefined,
    /// A list generated by the AI word provider
    AiCategory,
    /// A list supplied by the players (e.g. an uploaded text file)
    CustomList,
}

/// Topic requested from the AI word provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiTopic {
    Celebrities,
    Random,
}

impl AiTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiTopic::Celebrities => "CELEBRITIES",
            AiTopic::Random => "RANDOM",
        }
    }
}

/// Game setup chosen before a session starts
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partially saved configuration still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players sharing the device (3-12)
    pub player_count: usize,
    /// Number of impostors (1 to half the players)
    pub impostor_count: usize,
    /// Source of the secret words
    pub word_source: WordSource,
    /// Category name, required for predefined words
    pub selected_category: Option<String>,
    /// Topic used when words come from the AI provider
    pub ai_topic: AiTopic,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            impostor_count: 1,
            word_source: WordSource::Predefined,
            selected_category: Some(DEFAULT_CATEGORY.to_string()),
            ai_topic: AiTopic::Celebrities,
        }
    }
}

impl GameConfig {
    /// Largest impostor count allowed for this player count
    pub fn max_impostors(&self) -> usize {
        self.player_count / 2
    }

    /// Check the configuration invariants
    ///
    /// A custom word list is checked later, when words are resolved, since
    /// the list itself is not part of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` describing the first violated rule
    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "Player count must be between {} and {}",
                MIN_PLAYERS, MAX_PLAYERS
            )));
        }

        if self.impostor_count < MIN_IMPOSTORS || self.impostor_count > self.max_impostors() {
            return Err(GameError::InvalidConfig(format!(
                "Impostor count must be between {} and {} for {} players",
                MIN_IMPOSTORS,
                self.max_impostors(),
                self.player_count
            )));
        }

        if self.word_source == WordSource::Predefined {
            let category = self.selected_category.as_deref().ok_or_else(|| {
                GameError::InvalidConfig("A category must be selected".to_string())
            })?;

            match category_words(category) {
                Some(words) if !words.is_empty() => {}
                _ => {
                    return Err(GameError::InvalidConfig(format!(
                        "Unknown category '{}'",
                        category
                    )))
                }
            }
        }

        Ok(())
    }
}
