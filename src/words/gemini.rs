use super::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const CELEBRITIES_PROMPT: &str = "Genera una lista de 50 celebridades famosas mundiales (actores, cantantes, deportistas, etc.) para un juego de palabras. Devuelve solo los nombres en español.";

const RANDOM_PROMPT: &str = "Genera una lista de 50 conceptos o palabras interesantes para un juego de adivinar el impostor. Evita palabras muy abstractas.";

/// Gemini word fetcher using the generateContent REST endpoint
pub struct GeminiFetcher {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiFetcher {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key, model)
    }

    /// Create a fetcher against a custom endpoint
    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    fn prompt(topic: AiTopic) -> &'static str {
        match topic {
            AiTopic::Celebrities => CELEBRITIES_PROMPT,
            AiTopic::Random => RANDOM_PROMPT,
        }
    }

    fn build_request(topic: AiTopic) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Self::prompt(topic).to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({
                    "type": "OBJECT",
                    "properties": {
                        "words": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["words"]
                }),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct WordList {
    words: Vec<String>,
}

/// Extract the word list from a generateContent response body
fn parse_words(response: GeminiResponse) -> GameResult<Vec<String>> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect()
        })
        .ok_or_else(|| GameError::WordProvider("Response has no candidates".to_string()))?;

    let list: WordList = serde_json::from_str(&text)
        .map_err(|e| GameError::WordProvider(format!("Failed to parse word list: {}", e)))?;

    Ok(list.words)
}

#[async_trait]
impl WordFetcher for GeminiFetcher {
    async fn fetch_words(&self, topic: AiTopic) -> GameResult<Vec<String>> {
        let start = Instant::now();
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_request(topic))
            .send()
            .await
            .map_err(|e| GameError::WordProvider(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GameError::WordProvider(format!(
                "Gemini returned status {}",
                response.status()
            )));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GameError::WordProvider(format!("Invalid response body: {}", e)))?;

        let words = parse_words(body)?;

        tracing::debug!(
            "Gemini {} returned {} words for {} in {}ms",
            self.model,
            words.len(),
            topic.as_str(),
            start.elapsed().as_millis()
        );

        Ok(words)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
