use crate::{core::GameManager, storage::ConfigStore, words::WordProvider};
use std::{sync::Arc, time::Duration};
use tokio::sync::RwLock;

/// Slack added on top of the AI fetch timeout for the whole request
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(15);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub game_manager: Arc<RwLock<GameManager>>,
    pub word_provider: WordProvider,
    pub config_store: ConfigStore,
    /// HTTP request timeout, derived from the word provider's fetch timeout
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(word_provider: WordProvider, config_store: ConfigStore) -> Self {
        let request_timeout = word_provider.timeout() + REQUEST_TIMEOUT_MARGIN;

        Self {
            game_manager: Arc::new(RwLock::new(GameManager::new())),
            word_provider,
            config_store,
            request_timeout,
        }
    }
}
