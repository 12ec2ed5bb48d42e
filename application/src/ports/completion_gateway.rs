//! Completion gateway port
//!
//! Defines the interface for asking a chat-completion provider for a summary.

use async_trait::async_trait;
use herald_domain::CompletionResult;
use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("API authentication failed (401): {0}")]
    Unauthorized(String),

    #[error("Rate limited (429): {0}")]
    RateLimited(String),

    #[error("API server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Suggested next step for the user, if there is one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GatewayError::Unauthorized(_) => Some("Check the API key"),
            GatewayError::RateLimited(_) => Some("Check the remaining quota for the API key"),
            GatewayError::ServerError { .. } => Some("Try again later"),
            GatewayError::Network(_) => Some("Check the internet connection"),
            _ => None,
        }
    }
}

/// One summarization request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: f32,
}

impl CompletionRequest {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            max_tokens: None,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Gateway to a chat-completion provider
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Model the gateway sends requests to
    fn model(&self) -> &str;

    /// Send a system/user prompt pair and return the raw completion
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = CompletionRequest::new("system", "user");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, None);

        let request = request.with_max_tokens(Some(300)).with_temperature(0.2);
        assert_eq!(request.max_tokens, Some(300));
        assert_eq!(request.temperature, 0.2);
    }

    #[test]
    fn test_hints() {
        assert!(GatewayError::Unauthorized("bad key".into()).hint().is_some());
        assert!(GatewayError::InvalidResponse("no choices".into()).hint().is_none());
        assert_eq!(
            GatewayError::ServerError { status: 500, message: "boom".into() }.to_string(),
            "API server error (500): boom"
        );
    }
}
