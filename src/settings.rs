use std::{path::PathBuf, sync::Arc, time::Duration};

use crate::words::{GeminiFetcher, WordFetcher, WordProvider};

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port to listen on
    pub port: u16,
    /// Where the last used game configuration is saved
    pub config_path: PathBuf,
    /// Gemini API key; AI games use the fallback list without it
    pub gemini_api_key: Option<String>,
    /// Gemini model to use
    pub gemini_model: String,
    /// Upper bound on an AI word fetch
    pub ai_timeout: Duration,
    /// "development" enables debug logging
    pub environment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 8000,
            config_path: PathBuf::from("impostor_config.json"),
            gemini_api_key: None,
            gemini_model: "gemini-3-flash-preview".to_string(),
            ai_timeout: Duration::from_secs(15),
            environment: "production".to_string(),
        }
    }
}

/// Read a variable, treating blank values as unset
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: non_empty_var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            config_path: non_empty_var("CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_path),
            gemini_api_key: non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("API_KEY")),
            gemini_model: non_empty_var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            ai_timeout: non_empty_var("AI_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.ai_timeout),
            environment: non_empty_var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment.as_str(), "development" | "dev")
    }

    /// Default log filter for this environment
    pub fn log_filter(&self) -> &'static str {
        if self.is_development() {
            "impostor=debug,tower_http=info"
        } else {
            "impostor=info,tower_http=warn"
        }
    }

    /// Build the word provider, wiring Gemini in when a key is configured
    pub fn build_word_provider(&self) -> WordProvider {
        let fetcher = self.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiFetcher::new(key.clone(), self.gemini_model.clone()))
                as Arc<dyn WordFetcher>
        });

        if fetcher.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, AI games will use fallback words");
        }

        WordProvider::new(fetcher, self.ai_timeout)
    }
}
