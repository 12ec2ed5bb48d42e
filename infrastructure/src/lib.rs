//! Infrastructure layer for release-herald
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus settings loading and validation.

pub mod config;
pub mod discord;
pub mod openai;
pub mod x;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, HeraldSettings};
pub use discord::{DiscordConfig, DiscordWebhook, WebhookPayload};
pub use openai::{AiProvider, OpenAiConfig, OpenAiGateway};
pub use x::{XClient, XCredentials};
