// Translation dispatch
//
// Requests are resolved against the mode registry and sent to one of two backends:
// - chat: the primary, mode-aware chat-completion API
// - legacy: an alternate endpoint with a single fixed prompt

pub mod common;
pub mod chat;
pub mod legacy;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

pub use common::*;
use crate::config::Config;
use crate::error::{Result, TranslatorError};
use crate::modes::{self, DEFAULT_MODE};

/// A single chat-style exchange with a hosted model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the instruction prompt and the user message, returning the model's reply verbatim
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Stateless dispatcher shared by all request handlers
pub struct TranslationDispatcher {
    primary: Box<dyn CompletionBackend>,
    legacy: Box<dyn CompletionBackend>,
}

impl TranslationDispatcher {
    pub fn new(primary: Box<dyn CompletionBackend>, legacy: Box<dyn CompletionBackend>) -> Self {
        Self { primary, legacy }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let primary = chat::ChatCompletionBackend::new(config.translate.clone())?;
        let legacy = legacy::LegacyBackend::new(config.legacy.clone())?;
        Ok(Self::new(Box::new(primary), Box::new(legacy)))
    }

    /// Translate `request` using the prompt of its mode
    pub async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult> {
        let text = request.validated_text()?;

        let mode_id = request.mode.as_deref().unwrap_or(DEFAULT_MODE.id());
        let mode = modes::get(mode_id).ok_or_else(|| TranslatorError::UnknownMode {
            mode: mode_id.to_string(),
            valid: modes::valid_ids(),
        })?;

        let request_id = Uuid::new_v4();
        info!(%request_id, mode = mode.id(), chars = text.chars().count(), "Translating via {}", self.primary.name());

        let translated_text = self.primary
            .complete(mode.prompt_template(), &build_user_message(text))
            .await
            .map_err(|e| {
                warn!(%request_id, code = e.code(), "Translation failed: {}", e);
                e
            })?;

        info!(%request_id, chars = translated_text.chars().count(), "Translation completed");

        Ok(TranslationResult {
            success: true,
            original_text: text.to_string(),
            translated_text,
            target_language: request.target_language_or_default(),
            mode: mode.id().to_string(),
            mode_name: Some(mode.name().to_string()),
            mode_description: Some(mode.description().to_string()),
        })
    }

    /// Translate `request` through the legacy endpoint. Any `mode` is ignored and
    /// every upstream failure is reported as `TranslationFailed`.
    pub async fn translate_legacy(&self, request: TranslationRequest) -> Result<TranslationResult> {
        let text = request.validated_text()?;

        let request_id = Uuid::new_v4();
        info!(%request_id, chars = text.chars().count(), "Translating via {}", self.legacy.name());

        let translated_text = self.legacy
            .complete(legacy::LEGACY_PROMPT, &build_user_message(text))
            .await
            .map_err(|e| {
                warn!(%request_id, "Legacy translation failed: {}", e);
                match e {
                    TranslatorError::TranslationFailed(message) => TranslatorError::TranslationFailed(message),
                    other => TranslatorError::TranslationFailed(other.to_string()),
                }
            })?;

        info!(%request_id, chars = translated_text.chars().count(), "Legacy translation completed");

        Ok(TranslationResult {
            success: true,
            original_text: text.to_string(),
            translated_text,
            target_language: request.target_language_or_default(),
            mode: LEGACY_MODE.to_string(),
            mode_name: None,
            mode_description: None,
        })
    }
}
