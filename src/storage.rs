use std::path::{Path, PathBuf};

use crate::core::GameConfig;
use crate::error::{GameError, GameResult};

/// Persists the last used game configuration as a JSON file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved configuration
    ///
    /// Missing fields keep their defaults and unknown fields are ignored. A
    /// missing or unreadable file yields the default configuration.
    pub async fn load(&self) -> GameConfig {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return GameConfig::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return GameConfig::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt config {}: {}", self.path.display(), e);
            GameConfig::default()
        })
    }

    /// Save the configuration, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the file cannot be written
    pub async fn save(&self, config: &GameConfig) -> GameResult<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| GameError::Storage(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GameError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| GameError::Storage(format!("Failed to write {}: {}", self.path.display(), e)))?;

        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
