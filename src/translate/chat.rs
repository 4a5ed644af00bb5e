// Primary backend: OpenAI-compatible chat-completion API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{Result, TranslatorError};
use super::CompletionBackend;
use super::common::{build_http_client, classify_status, ChatMessage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Chat-completion backend speaking the `/chat/completions` protocol
pub struct ChatCompletionBackend {
    client: Client,
    config: TranslateConfig,
}

impl ChatCompletionBackend {
    pub fn new(config: TranslateConfig) -> Result<Self> {
        let client = build_http_client(config.timeout_secs)?;
        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionBackend {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_message)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let url = self.url();
        debug!("Sending chat completion request to: {}", url);

        let response = self.client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslatorError::TranslationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Chat completion API returned {}: {}", status, body);
            return Err(classify_status(status, &body));
        }

        let completion: ChatCompletionResponse = response.json().await
            .map_err(|e| TranslatorError::TranslationFailed(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TranslatorError::TranslationFailed("Response contained no completion content".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "chat-completion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint() {
        let mut config = TranslateConfig::default();
        config.endpoint = "http://localhost:8080/v1/".to_string();
        let backend = ChatCompletionBackend::new(config).unwrap();
        assert_eq!(backend.url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_response_without_content() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(parsed.choices[0].message.content.is_none());

        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
