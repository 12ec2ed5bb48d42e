//! Discord webhook adapter
//!
//! Posts releases as rich embeds and free text as plain messages. No bot
//! account is involved; the webhook URL is the only credential.

mod config;
mod payload;
mod webhook;

pub use config::{DEFAULT_COLOR, DEFAULT_FOOTER, DiscordConfig};
pub use payload::{Embed, EmbedField, EmbedFooter, GITHUB_ICON_URL, WebhookPayload};
pub use webhook::DiscordWebhook;
