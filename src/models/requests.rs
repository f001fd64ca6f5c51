use serde::{Deserialize, Serialize};

use crate::core::GameConfig;
use crate::words::parse_word_list;

/// Request to start a new game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartGameRequest {
    /// Configuration to play with; the saved configuration when absent
    pub config: Option<GameConfig>,
    /// Words for a custom list game
    pub custom_words: Vec<String>,
    /// Raw uploaded text, one word per line, appended to `custom_words`
    pub custom_text: Option<String>,
}

impl StartGameRequest {
    /// All custom words from the request, trimmed and without blanks
    pub fn custom_list(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .custom_words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        if let Some(text) = &self.custom_text {
            words.extend(parse_word_list(text));
        }

        words
    }
}

/// Request to parse an uploaded word list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWordsRequest {
    pub text: String,
}
