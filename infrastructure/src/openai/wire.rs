//! Chat-completions wire types and response conversion

use herald_application::{CompletionRequest, GatewayError};
use herald_domain::CompletionResult;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    pub fn from_request(model: &str, request: &CompletionRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user_prompt.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    /// OpenRouter reasoning models
    #[serde(default)]
    pub reasoning: Option<String>,
    /// DeepSeek-style servers; some send it alongside `reasoning`
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

impl ResponseMessage {
    /// First non-blank reasoning field
    pub fn reasoning_text(&self) -> Option<&str> {
        [&self.reasoning, &self.reasoning_content]
            .into_iter()
            .filter_map(|r| r.as_deref())
            .find(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Parse a successful response body into a completion result
pub fn parse_completion(body: &str) -> Result<CompletionResult, GatewayError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))?;

    let reasoning = choice.message.reasoning_text().map(str::to_string);
    let mut result = CompletionResult::new(choice.message.content, reasoning);
    if let Some(model) = response.model {
        result = result.with_model(model);
    }
    if let Some(tokens) = response.usage.and_then(|u| u.total_tokens) {
        result = result.with_total_tokens(tokens);
    }
    Ok(result)
}

/// Map a non-success status and its body to a gateway error
pub fn error_for_status(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 => GatewayError::Unauthorized(message),
        429 => GatewayError::RateLimited(message),
        500..=599 => GatewayError::ServerError { status, message },
        _ => GatewayError::RequestFailed { status, message },
    }
}
