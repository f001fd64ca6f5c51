use serde::{Deserialize, Serialize};

use super::Role;

/// What a player sees when their secret is revealed
///
/// Impostors get a dedicated variant rather than a placeholder string, so
/// their secret can never equal the citizens' word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "word", rename_all = "lowercase")]
pub enum SecretWord {
    Word(String),
    Impostor,
}

impl SecretWord {
    /// The real word, if this secret carries one
    pub fn as_word(&self) -> Option<&str> {
        match self {
            SecretWord::Word(word) => Some(word),
            SecretWord::Impostor => None,
        }
    }
}

/// Represents a player sharing the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 0-based seat on the device, stable for the session
    pub id: usize,
    /// Citizen or impostor
    pub role: Role,
    /// Word shown on reveal
    pub secret_word: SecretWord,
}

impl Player {
    /// Create a citizen who knows the word
    pub fn citizen(id: usize, word: String) -> Self {
        Self {
            id,
            role: Role::Citizen,
            secret_word: SecretWord::Word(word),
        }
    }

    /// Create an impostor
    pub fn impostor(id: usize) -> Self {
        Self {
            id,
            role: Role::Impostor,
            secret_word: SecretWord::Impostor,
        }
    }

    pub fn is_impostor(&self) -> bool {
        self.role == Role::Impostor
    }

    /// Convert player to dictionary for API responses
    ///
    /// # Arguments
    ///
    /// * `include_secret` - Whether to include role and word (only while viewing)
    pub fn to_dict(&self, include_secret: bool) -> serde_json::Value {
        if include_secret {
            serde_json::json!({
                "id": self.id,
                "role": self.role,
                "secret_word": self.secret_word,
            })
        } else {
            serde_json::json!({ "id": self.id })
        }
    }
}
