//! Configuration errors

use thiserror::Error;

/// Errors raised while loading settings or building client configurations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("OPENAI_API_KEY or OPENROUTER_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Invalid API key format (must start with sk- or sk-or-)")]
    InvalidApiKey,

    #[error("Unknown AI provider: {0} (expected openai or openrouter)")]
    UnknownProvider(String),

    #[error("DISCORD_WEBHOOK_URL environment variable is required")]
    MissingWebhookUrl,

    #[error("Invalid Discord webhook URL format: {0}")]
    InvalidWebhookUrl(String),

    #[error("X API credentials are incomplete, missing: {}", .0.join(", "))]
    MissingXCredentials(Vec<&'static str>),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl ConfigError {
    /// Whether the error only means "this integration is not set up"
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingApiKey
                | ConfigError::MissingWebhookUrl
                | ConfigError::MissingXCredentials(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_display() {
        let err = ConfigError::MissingXCredentials(vec!["X_API_KEY", "X_ACCESS_SECRET"]);
        assert_eq!(
            err.to_string(),
            "X API credentials are incomplete, missing: X_API_KEY, X_ACCESS_SECRET"
        );
        assert!(err.is_missing());
        assert!(!ConfigError::InvalidApiKey.is_missing());
    }
}
