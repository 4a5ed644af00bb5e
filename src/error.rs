use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown translation mode '{mode}'. Valid modes: {}", .valid.join(", "))]
    UnknownMode { mode: String, valid: Vec<String> },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

impl TranslatorError {
    /// Request carried no usable text
    pub fn missing_text() -> Self {
        Self::InvalidInput("Text to translate is missing or empty".to_string())
    }

    /// Wire error code reported in the `error` field of failure payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::UnknownMode { .. } => "UnknownMode",
            Self::Auth(_) => "AuthError",
            Self::RateLimited(_) => "RateLimited",
            Self::TranslationFailed(_) => "TranslationFailed",
            Self::Io(_) | Self::Toml(_) | Self::Config(_) => "InternalError",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_modes: Option<&'a [String]>,
}

impl ResponseError for TranslatorError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::UnknownMode { .. } => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let valid_modes = match self {
            Self::UnknownMode { valid, .. } => Some(valid.as_slice()),
            _ => None,
        };
        let body = ErrorBody {
            success: false,
            error: self.code(),
            message: self.to_string(),
            valid_modes,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
