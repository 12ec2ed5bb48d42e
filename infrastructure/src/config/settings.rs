//! Raw settings data types
//!
//! These structs mirror the TOML config file. Environment variables are
//! mapped onto the same fields by [`super::ConfigLoader`].
//!
//! ```toml
//! [ai]
//! provider = "openrouter"
//! openrouter_model = "google/gemma-7b-it:free"
//! max_tokens = 500
//!
//! [discord]
//! footer = "Release Note X"
//!
//! [http]
//! timeout_seconds = 30
//! ```

use herald_domain::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigError;

/// All settings, grouped by integration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeraldSettings {
    pub ai: AiSettings,
    pub discord: DiscordSettings,
    pub x: XSettings,
    pub http: HttpSettings,
}

/// Chat-completion provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// `openai` or `openrouter`; inferred from the keys when unset
    pub provider: Option<String>,
    pub openai_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: Option<String>,
    pub openai_model: Option<String>,
    pub openrouter_model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Force the summary language instead of detecting it
    pub language: Option<Language>,
}

/// Discord webhook settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordSettings {
    pub webhook_url: Option<String>,
    /// Embed footer text
    pub footer: Option<String>,
    /// Embed color as a 24-bit RGB integer
    pub color: Option<u32>,
}

/// X (Twitter) OAuth 1.0a user-context credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XSettings {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_secret: Option<String>,
}

/// HTTP client settings shared by every adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 60,
        }
    }
}

impl HttpSettings {
    /// Build the HTTP client used by the adapters
    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .user_agent(concat!("release-herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))
    }
}

/// Treat blank strings as unset
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
