//! Completion gateway implementation over HTTP

use super::config::OpenAiConfig;
use super::wire::{ChatCompletionRequest, error_for_status, parse_completion};
use async_trait::async_trait;
use herald_application::{CompletionGateway, CompletionRequest, GatewayError};
use herald_domain::CompletionResult;
use tracing::{debug, info};

/// Completion gateway for OpenAI and OpenRouter
pub struct OpenAiGateway {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiGateway {
    pub fn new(client: reqwest::Client, config: OpenAiConfig) -> Self {
        info!("Using {} API ({})", config.provider, config.model);
        Self { client, config }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, GatewayError> {
        let url = self.config.completions_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&ChatCompletionRequest::from_request(&self.config.model, request))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }

        let result = parse_completion(&body)?;
        if let Some(tokens) = result.total_tokens {
            debug!("Completion used {} tokens", tokens);
        }
        Ok(result)
    }
}
