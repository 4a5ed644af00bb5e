use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TranslatorError};

/// Target language tag used when a request does not name one
pub const DEFAULT_TARGET_LANGUAGE: &str = "vietnamese";

/// Prefix of the user message sent to every backend
pub const USER_MESSAGE_PREFIX: &str = "Translate this text to Vietnamese: ";

/// Mode reported by results of the legacy path
pub const LEGACY_MODE: &str = "legacy";

pub const AUTH_ERROR_MESSAGE: &str = "API credential invalid or missing";
pub const RATE_LIMIT_MESSAGE: &str = "Upstream rate limit reached; retry later or raise the quota";

/// Incoming translation request as posted by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// The text to translate, rejected when absent or blank
    pub fn validated_text(&self) -> Result<&str> {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(TranslatorError::missing_text()),
        }
    }

    pub fn target_language_or_default(&self) -> String {
        self.target_language
            .clone()
            .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string())
    }
}

/// Body of the legacy route. It has no `mode`: whatever the client sends there,
/// of any JSON type, is dropped like every other unknown field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

impl From<LegacyTranslationRequest> for TranslationRequest {
    fn from(request: LegacyTranslationRequest) -> Self {
        Self {
            text: request.text,
            target_language: request.target_language,
            mode: None,
        }
    }
}

/// Successful translation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_description: Option<String>,
}

/// Role-tagged message of a chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub fn build_user_message(text: &str) -> String {
    format!("{}{}", USER_MESSAGE_PREFIX, text)
}

/// Build an HTTP client, applying `timeout_secs` when set
pub fn build_http_client(timeout_secs: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| TranslatorError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Pull a provider error message out of an error response body.
///
/// Understands `{"error": {"message": ...}}`, `{"error": "..."}` and
/// `{"message": "..."}`.
pub fn extract_upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match value.get("error") {
        Some(Value::Object(error)) => error.get("message").and_then(Value::as_str),
        Some(Value::String(error)) => Some(error.as_str()),
        _ => None,
    }
    .or_else(|| value.get("message").and_then(Value::as_str))?;

    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Describe a failed upstream response, preferring the provider's own message
pub fn describe_upstream_failure(status: StatusCode, body: &str) -> String {
    extract_upstream_message(body)
        .unwrap_or_else(|| format!("Upstream API error {}: {}", status, body.trim()))
}

/// Map a non-success upstream status to the error taxonomy
pub fn classify_status(status: StatusCode, body: &str) -> TranslatorError {
    match status {
        StatusCode::UNAUTHORIZED => TranslatorError::Auth(AUTH_ERROR_MESSAGE.to_string()),
        StatusCode::TOO_MANY_REQUESTS => TranslatorError::RateLimited(RATE_LIMIT_MESSAGE.to_string()),
        _ => TranslatorError::TranslationFailed(describe_upstream_failure(status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_text() {
        assert!(matches!(
            TranslationRequest::default().validated_text(),
            Err(TranslatorError::InvalidInput(_))
        ));
        assert!(matches!(
            TranslationRequest::new("   \n\t").validated_text(),
            Err(TranslatorError::InvalidInput(_))
        ));
        // Surrounding whitespace is preserved
        assert_eq!(TranslationRequest::new("  hello ").validated_text().unwrap(), "  hello ");
    }

    #[test]
    fn test_target_language_default() {
        assert_eq!(TranslationRequest::new("hi").target_language_or_default(), "vietnamese");
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: TranslationRequest =
            serde_json::from_str(r#"{"text":"Hello","targetLanguage":"vietnamese","mode":"casual"}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("Hello"));
        assert_eq!(request.target_language.as_deref(), Some("vietnamese"));
        assert_eq!(request.mode.as_deref(), Some("casual"));

        let empty: TranslationRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_none());
    }

    #[test]
    fn test_legacy_request_drops_mode_of_any_type() {
        for body in [
            r#"{"text":"Hello","mode":5}"#,
            r#"{"text":"Hello","mode":{"id":"formal"}}"#,
            r#"{"text":"Hello","mode":"anything"}"#,
        ] {
            let request: LegacyTranslationRequest = serde_json::from_str(body).unwrap();
            let request = TranslationRequest::from(request);
            assert_eq!(request.text.as_deref(), Some("Hello"));
            assert!(request.mode.is_none());
        }
    }

    #[test]
    fn test_user_message() {
        assert_eq!(build_user_message("Good morning"), "Translate this text to Vietnamese: Good morning");
    }

    #[test]
    fn test_extract_upstream_message() {
        assert_eq!(
            extract_upstream_message(r#"{"error":{"message":"model overloaded","type":"server_error"}}"#),
            Some("model overloaded".to_string())
        );
        assert_eq!(
            extract_upstream_message(r#"{"error":"bad gateway"}"#),
            Some("bad gateway".to_string())
        );
        assert_eq!(
            extract_upstream_message(r#"{"message":"quota exhausted"}"#),
            Some("quota exhausted".to_string())
        );
        assert_eq!(extract_upstream_message(r#"{"error":{"code":500}}"#), None);
        assert_eq!(extract_upstream_message("<html>502</html>"), None);
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, ""),
            TranslatorError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            TranslatorError::RateLimited(_)
        ));
        match classify_status(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") {
            TranslatorError::TranslationFailed(message) => {
                assert!(message.contains("503"));
                assert!(message.contains("down for maintenance"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_result_omits_missing_mode_metadata() {
        let result = TranslationResult {
            success: true,
            original_text: "Hi".to_string(),
            translated_text: "Xin chào".to_string(),
            target_language: "vietnamese".to_string(),
            mode: LEGACY_MODE.to_string(),
            mode_name: None,
            mode_description: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["originalText"], "Hi");
        assert_eq!(value["mode"], "legacy");
        assert!(value.get("modeName").is_none());
    }
}
