//! Provider selection and validation

use crate::config::{AiSettings, ConfigError, non_blank};
use std::fmt;
use std::str::FromStr;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENROUTER_MODEL: &str = "google/gemma-7b-it:free";

/// Chat-completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    OpenAi,
    OpenRouter,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::OpenRouter => "openrouter",
        }
    }

    /// Where the user can inspect their key and quota
    pub fn keys_url(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "https://platform.openai.com/usage",
            AiProvider::OpenRouter => "https://openrouter.ai/keys",
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::OpenAi => write!(f, "OpenAI"),
            AiProvider::OpenRouter => write!(f, "OpenRouter"),
        }
    }
}

impl FromStr for AiProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "openrouter" => Ok(AiProvider::OpenRouter),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

/// Validated connection settings for [`super::OpenAiGateway`]
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub provider: AiProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiConfig {
    /// Select the provider and validate its key.
    ///
    /// An OpenRouter key, or `provider = "openrouter"`, selects OpenRouter.
    /// The OpenRouter key wins when both keys are present. `openai_model`
    /// overrides the model for either provider.
    pub fn from_settings(settings: &AiSettings) -> Result<Self, ConfigError> {
        let openrouter_key = non_blank(&settings.openrouter_api_key);
        let openai_key = non_blank(&settings.openai_api_key);

        let requested = non_blank(&settings.provider)
            .map(AiProvider::from_str)
            .transpose()?;
        let provider = if openrouter_key.is_some() || requested == Some(AiProvider::OpenRouter) {
            AiProvider::OpenRouter
        } else {
            AiProvider::OpenAi
        };

        let api_key = openrouter_key
            .or(openai_key)
            .ok_or(ConfigError::MissingApiKey)?;
        if !api_key.starts_with("sk-") {
            // sk-or- keys share the sk- prefix
            return Err(ConfigError::InvalidApiKey);
        }

        let (base_url, default_model) = match provider {
            AiProvider::OpenAi => (OPENAI_BASE_URL.to_string(), DEFAULT_OPENAI_MODEL),
            AiProvider::OpenRouter => (
                non_blank(&settings.openrouter_base_url)
                    .unwrap_or(OPENROUTER_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
                non_blank(&settings.openrouter_model).unwrap_or(DEFAULT_OPENROUTER_MODEL),
            ),
        };
        let model = non_blank(&settings.openai_model).unwrap_or(default_model);

        Ok(Self {
            provider,
            api_key: api_key.to_string(),
            base_url,
            model: model.to_string(),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
