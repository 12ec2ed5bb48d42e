//! Webhook settings validation

use crate::config::{ConfigError, DiscordSettings, non_blank};
use std::fmt;

/// Discord blurple
pub const DEFAULT_COLOR: u32 = 5814783;
pub const DEFAULT_FOOTER: &str = "Release Note X";

const WEBHOOK_PREFIXES: [&str; 2] = [
    "https://discord.com/api/webhooks/",
    "https://discordapp.com/api/webhooks/",
];

/// Validated settings for [`super::DiscordWebhook`]
#[derive(Clone, PartialEq, Eq)]
pub struct DiscordConfig {
    pub webhook_url: String,
    pub footer: String,
    pub color: u32,
}

impl fmt::Debug for DiscordConfig {
    // The webhook URL embeds its token
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("webhook_url", &"<redacted>")
            .field("footer", &self.footer)
            .field("color", &self.color)
            .finish()
    }
}

impl DiscordConfig {
    pub fn from_settings(settings: &DiscordSettings) -> Result<Self, ConfigError> {
        let webhook_url = non_blank(&settings.webhook_url).ok_or(ConfigError::MissingWebhookUrl)?;
        if !WEBHOOK_PREFIXES.iter().any(|p| webhook_url.starts_with(p)) {
            return Err(ConfigError::InvalidWebhookUrl(redact(webhook_url)));
        }

        Ok(Self {
            webhook_url: webhook_url.to_string(),
            footer: settings
                .footer
                .clone()
                .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
            color: settings.color.unwrap_or(DEFAULT_COLOR),
        })
    }
}

/// Scheme and host only
fn redact(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or_default();
            format!("{}://{}/...", scheme, host)
        }
        None => "<not a URL>".to_string(),
    }
}
