use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, TranslatorError};

/// Environment variable holding the primary chat-completion credential
pub const ENV_API_KEY: &str = "TRANSLATOR_API_KEY";
pub const ENV_ENDPOINT: &str = "TRANSLATOR_ENDPOINT";
pub const ENV_MODEL: &str = "TRANSLATOR_MODEL";
pub const ENV_PORT: &str = "PORT";
pub const ENV_LEGACY_ENDPOINT: &str = "LEGACY_ENDPOINT";
pub const ENV_LEGACY_API_KEY: &str = "LEGACY_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub translate: TranslateConfig,
    pub legacy: LegacyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of HTTP worker threads (defaults to the number of CPUs)
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Base URL of an OpenAI-compatible API (`/chat/completions` is appended)
    pub endpoint: String,
    /// Bearer credential for the endpoint
    pub api_key: String,
    /// Model to request
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length ceiling in tokens
    pub max_tokens: u32,
    /// Request timeout; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Full URL of the legacy translation endpoint; empty disables the legacy path
    pub endpoint: String,
    /// Credential sent in `auth_header`
    pub api_key: String,
    /// Header carrying the credential
    pub auth_header: String,
    /// Model to request
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length ceiling in tokens
    pub max_tokens: u32,
    /// Request timeout; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: None,
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: String::new(),
            model: "openai/gpt-oss-120b".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            timeout_secs: None,
        }
    }
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            auth_header: "x-api-key".to_string(),
            model: "legacy-translator".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslatorError::Config(format!("Failed to read config file: {}", e)))?;

        Ok(toml::from_str(&content)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TranslatorError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TranslatorError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load configuration from `path`, or `config.toml` in the working directory,
    /// falling back to defaults, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(config_path) => Self::from_file(config_path)?,
            None => {
                if Path::new("config.toml").exists() {
                    info!("Found config.toml in current directory, loading...");
                    Self::from_file("config.toml")?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            debug!("Using primary API key from {}", ENV_API_KEY);
            self.translate.api_key = key;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.translate.endpoint = endpoint;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.translate.model = model;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                TranslatorError::Config(format!("Invalid {} value '{}'", ENV_PORT, port))
            })?;
        }
        if let Some(endpoint) = lookup(ENV_LEGACY_ENDPOINT) {
            self.legacy.endpoint = endpoint;
        }
        if let Some(key) = lookup(ENV_LEGACY_API_KEY) {
            debug!("Using legacy API key from {}", ENV_LEGACY_API_KEY);
            self.legacy.api_key = key;
        }
        Ok(())
    }
}
