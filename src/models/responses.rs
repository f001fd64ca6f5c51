use serde::{Deserialize, Serialize};

/// Response after a game was started
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameResponse {
    /// Game's unique ID
    pub game_id: String,
    /// Number of words in the pool the secret was drawn from
    pub word_count: usize,
    /// Whether the AI provider failed and fallback words were used
    pub used_fallback_words: bool,
}

/// Predefined category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    pub word_count: usize,
}

/// Words parsed from an upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedWordsResponse {
    pub words: Vec<String>,
    pub count: usize,
}

impl ParsedWordsResponse {
    pub fn new(words: Vec<String>) -> Self {
        let count = words.len();
        Self { words, count }
    }
}
