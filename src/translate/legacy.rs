// Legacy backend: fixed prompt, flat `content` response envelope

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LegacyConfig;
use crate::error::{Result, TranslatorError};
use super::CompletionBackend;
use super::common::{build_http_client, describe_upstream_failure, ChatMessage};

/// Instruction sent on every legacy call regardless of the requested mode
pub const LEGACY_PROMPT: &str = "You are a professional translator. Translate the text to Vietnamese with proper \
formatting suitable for document use. Rules: 1) Return ONLY the translated text without explanations or \
prefixes 2) Maintain proper paragraph breaks and sentence structure 3) Use appropriate punctuation and \
spacing 4) Format the output to be clean and professional for copying to document files 5) Preserve any \
original text structure (bullets, lists, etc.) in Vietnamese format 6) If there are keywords in \
parentheses ( ), keep the keywords in parentheses in the translation to help understand more.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyRequest {
    pub model: String,
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// Backend for the legacy endpoint. It never distinguishes failure classes:
/// every problem surfaces as `TranslationFailed`.
pub struct LegacyBackend {
    client: Client,
    config: LegacyConfig,
}

impl LegacyBackend {
    pub fn new(config: LegacyConfig) -> Result<Self> {
        let client = build_http_client(config.timeout_secs)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionBackend for LegacyBackend {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        if self.config.endpoint.trim().is_empty() {
            return Err(TranslatorError::TranslationFailed(
                "Legacy translation endpoint is not configured".to_string(),
            ));
        }

        let request = LegacyRequest {
            model: self.config.model.clone(),
            system: system_prompt.to_string(),
            messages: vec![ChatMessage::user(user_message)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending legacy translation request to: {}", self.config.endpoint);

        let response = self.client
            .post(&self.config.endpoint)
            .header(self.config.auth_header.as_str(), self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslatorError::TranslationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::TranslationFailed(describe_upstream_failure(status, &body)));
        }

        let envelope: LegacyResponse = response.json().await
            .map_err(|e| TranslatorError::TranslationFailed(format!("Failed to parse legacy response: {}", e)))?;

        envelope.content.ok_or_else(|| {
            TranslatorError::TranslationFailed("Legacy response contained no content".to_string())
        })
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}
