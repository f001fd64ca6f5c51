mod gemini;

use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub use gemini::GeminiFetcher;

use crate::core::{category_words, AiTopic, GameConfig, WordSource, FALLBACK_WORDS};
use crate::error::{GameError, GameResult};

/// Source of AI-generated word lists
#[async_trait]
pub trait WordFetcher: Send + Sync {
    /// Fetch a list of words for the given topic
    async fn fetch_words(&self, topic: AiTopic) -> GameResult<Vec<String>>;

    /// Get the name of this fetcher
    fn name(&self) -> &str;
}

/// Words resolved for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWords {
    pub words: Vec<String>,
    /// True when the AI provider failed and the fixed fallback list was used
    pub used_fallback: bool,
}

/// Resolves the word pool for a configuration
#[derive(Clone)]
pub struct WordProvider {
    fetcher: Option<Arc<dyn WordFetcher>>,
    timeout: Duration,
}

impl WordProvider {
    /// Create a provider; without a fetcher AI games always use the fallback list
    pub fn new(fetcher: Option<Arc<dyn WordFetcher>>, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    /// Upper bound on a single AI word fetch
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the words for a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Game configuration selecting the source
    /// * `custom_list` - Player supplied words, used for `CustomList`
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordPool` if the source has no words. AI failures are
    /// never returned; they fall back to a fixed list instead.
    pub async fn resolve(
        &self,
        config: &GameConfig,
        custom_list: &[String],
    ) -> GameResult<ResolvedWords> {
        let resolved = match config.word_source {
            WordSource::Predefined => {
                let category = config.selected_category.as_deref().unwrap_or_default();
                let words = category_words(category)
                    .map(|words| words.iter().map(|w| w.to_string()).collect())
                    .unwrap_or_default();
                ResolvedWords {
                    words,
                    used_fallback: false,
                }
            }
            WordSource::AiCategory => self.fetch_or_fallback(config.ai_topic).await,
            WordSource::CustomList => ResolvedWords {
                words: custom_list.to_vec(),
                used_fallback: false,
            },
        };

        if resolved.words.is_empty() {
            return Err(GameError::EmptyWordPool(format!(
                "No words available for source {:?}",
                config.word_source
            )));
        }

        Ok(resolved)
    }

    async fn fetch_or_fallback(&self, topic: AiTopic) -> ResolvedWords {
        match self.fetch(topic).await {
            Ok(words) => ResolvedWords {
                words,
                used_fallback: false,
            },
            Err(e) => {
                tracing::warn!("{}, using fallback words", e);
                ResolvedWords {
                    words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
                    used_fallback: true,
                }
            }
        }
    }

    async fn fetch(&self, topic: AiTopic) -> GameResult<Vec<String>> {
        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or_else(|| GameError::WordProvider("No AI word provider configured".to_string()))?;

        let words = tokio::time::timeout(self.timeout, fetcher.fetch_words(topic))
            .await
            .map_err(|_| {
                GameError::WordProvider(format!(
                    "{} timed out after {:?}",
                    fetcher.name(),
                    self.timeout
                ))
            })??;

        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(GameError::WordProvider(format!(
                "{} returned no words",
                fetcher.name()
            )));
        }

        tracing::info!("Fetched {} words from {}", words.len(), fetcher.name());
        Ok(words)
    }
}

/// Split uploaded text into words, one per non-empty line
///
/// Accepts both LF and CRLF line endings; lines are trimmed.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
