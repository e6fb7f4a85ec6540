use crate::config::AdvisorConfig;
use crate::summary::build_prompt;
use async_trait::async_trait;
use serde_json::json;
use syndicate_core::GameSnapshot;

/// Returned without a network attempt when no API key is configured.
pub const NOT_CONFIGURED_TEXT: &str = "API Key not configured.";

/// Returned whenever the request fails in any way.
pub const FALLBACK_TEXT: &str = "The shadows are silent for now...";

/// Returned when the service answers successfully but with no text.
pub const NO_INSIGHTS_TEXT: &str = "No insights available.";

/// Something that can narrate a snapshot. Total by contract: the
/// result is always displayable prose, never an error.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn analyze(&self, snapshot: &GameSnapshot) -> String;
}

#[derive(Debug, thiserror::Error)]
enum AdvisorError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no candidate text in response")]
    MissingText,
}

/// Narrator backed by the Google generative-language REST API.
pub struct GeminiNarrator {
    client: reqwest::Client,
    config: AdvisorConfig,
}

impl GeminiNarrator {
    pub fn new(config: AdvisorConfig) -> Self {
        GeminiNarrator {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn generate(&self, api_key: &str, prompt: String) -> Result<String, AdvisorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.8,
                "thinkingConfig": { "thinkingBudget": 0 }
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(AdvisorError::MissingText)?;

        Ok(text.to_string())
    }
}

#[async_trait]
impl Narrator for GeminiNarrator {
    async fn analyze(&self, snapshot: &GameSnapshot) -> String {
        let Some(api_key) = self.config.api_key.clone() else {
            return NOT_CONFIGURED_TEXT.to_string();
        };

        let prompt = build_prompt(snapshot);
        match self.generate(&api_key, prompt).await {
            Ok(text) if text.trim().is_empty() => NO_INSIGHTS_TEXT.to_string(),
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "narrative analysis failed");
                FALLBACK_TEXT.to_string()
            }
        }
    }
}
