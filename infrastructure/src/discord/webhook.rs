//! Publisher implementation over a Discord webhook

use super::config::DiscordConfig;
use super::payload::WebhookPayload;
use async_trait::async_trait;
use chrono::Utc;
use herald_application::{PublishError, Publisher};
use herald_domain::{Announcement, Channel, PublishReceipt};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct WebhookMessage {
    id: String,
}

/// Publisher that posts to a Discord webhook
pub struct DiscordWebhook {
    client: reqwest::Client,
    config: DiscordConfig,
}

impl DiscordWebhook {
    pub fn new(client: reqwest::Client, config: DiscordConfig) -> Self {
        Self { client, config }
    }

    /// Payload that [`Publisher::publish`] would send right now
    pub fn payload(&self, announcement: &Announcement) -> WebhookPayload {
        WebhookPayload::from_announcement(announcement, &self.config, Utc::now())
    }

    /// Send a prepared payload
    pub async fn send(&self, payload: &WebhookPayload) -> Result<PublishReceipt, PublishError> {
        debug!(
            "Discord payload: {}",
            serde_json::to_string(payload).unwrap_or_default()
        );

        // The webhook URL carries its token; keep it out of error text
        let response = self
            .client
            .post(&self.config.webhook_url)
            .query(&[("wait", "true")])
            .json(payload)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(PublishError::from_status(status.as_u16(), body));
        }

        let message: WebhookMessage =
            serde_json::from_str(&body).map_err(|e| PublishError::InvalidResponse(e.to_string()))?;
        Ok(PublishReceipt::new(Channel::Discord, message.id))
    }
}

#[async_trait]
impl Publisher for DiscordWebhook {
    fn channel(&self) -> Channel {
        Channel::Discord
    }

    async fn publish(&self, announcement: &Announcement) -> Result<PublishReceipt, PublishError> {
        self.send(&self.payload(announcement)).await
    }
}
