//! Webhook payload types

use super::config::DiscordConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use herald_domain::{Announcement, DEFAULT_DESCRIPTION, Release, truncate_chars};
use serde::{Deserialize, Serialize};

pub const GITHUB_ICON_URL: &str =
    "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";

const MAX_CONTENT_CHARS: usize = 2000;
const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Body of an `Execute Webhook` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl WebhookPayload {
    /// Plain text message
    pub fn message(text: &str) -> Self {
        Self {
            content: Some(truncate_chars(text, MAX_CONTENT_CHARS)),
            embeds: Vec::new(),
        }
    }

    /// Release card stamped with `now`
    pub fn release(
        release: &Release,
        summary: Option<&str>,
        config: &DiscordConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let description = summary.unwrap_or(DEFAULT_DESCRIPTION);
        let footer = (!config.footer.is_empty()).then(|| EmbedFooter {
            text: config.footer.clone(),
            icon_url: GITHUB_ICON_URL.to_string(),
        });

        let embed = Embed {
            title: format!("🚀 {}", release.title()),
            url: release.url().to_string(),
            description: truncate_chars(description, MAX_DESCRIPTION_CHARS),
            color: config.color,
            fields: vec![
                EmbedField {
                    name: "📦 リリース".to_string(),
                    value: format!("[{}]({})", release.title(), release.url()),
                    inline: true,
                },
                EmbedField {
                    name: "🔗 リンク".to_string(),
                    value: format!("[GitHub Releases]({})", release.url()),
                    inline: true,
                },
            ],
            timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            footer,
        };

        Self {
            content: None,
            embeds: vec![embed],
        }
    }

    pub fn from_announcement(
        announcement: &Announcement,
        config: &DiscordConfig,
        now: DateTime<Utc>,
    ) -> Self {
        match announcement {
            Announcement::Release { release, summary } => {
                Self::release(release, summary.as_deref(), config, now)
            }
            Announcement::Text(text) => Self::message(text),
        }
    }
}
