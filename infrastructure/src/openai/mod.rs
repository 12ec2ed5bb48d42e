//! OpenAI-compatible chat-completion adapter
//!
//! Talks to `POST {base_url}/chat/completions` on OpenAI or OpenRouter and
//! reduces the response to a [`herald_domain::CompletionResult`].

mod config;
mod gateway;
mod wire;

pub use config::{
    AiProvider, DEFAULT_OPENAI_MODEL, DEFAULT_OPENROUTER_MODEL, OPENAI_BASE_URL,
    OPENROUTER_BASE_URL, OpenAiConfig,
};
pub use gateway::OpenAiGateway;
pub use wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
