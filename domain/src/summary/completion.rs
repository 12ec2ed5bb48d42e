//! Completion result value object

use serde::{Deserialize, Serialize};

/// One chat-completion response, reduced to the two text channels the
/// summary extractor looks at.
///
/// `primary_text` is the declared answer (`message.content`). Some providers
/// (reasoning models served through OpenRouter, GLM, Nvidia, ...) also return
/// a `reasoning` field that may hold the only usable answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub primary_text: Option<String>,
    pub reasoning_text: Option<String>,
    /// Model identifier echoed back by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// `usage.total_tokens`, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
}

impl CompletionResult {
    pub fn new(primary_text: Option<String>, reasoning_text: Option<String>) -> Self {
        Self {
            primary_text,
            reasoning_text,
            model: None,
            total_tokens: None,
        }
    }

    /// A response with only a primary answer
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Some(text.into()), None)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_total_tokens(mut self, tokens: u64) -> Self {
        self.total_tokens = Some(tokens);
        self
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary_text.as_deref()
    }

    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning_text.as_deref()
    }

    /// Run the summary extractor over this response.
    pub fn summary(&self) -> String {
        super::extractor::extract(self.primary(), self.reasoning())
    }
}
