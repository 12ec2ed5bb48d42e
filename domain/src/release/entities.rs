//! Release and channel entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A published software release (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    title: String,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Release {
    /// Create a release, rejecting blank titles or URLs
    pub fn try_new(title: impl Into<String>, url: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let url = url.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        Ok(Self {
            title,
            url,
            notes: None,
        })
    }

    /// Attach release notes; blank notes are treated as absent
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Destination platform for an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Discord,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::X => "x",
            Channel::Discord => "discord",
        }
    }

    /// Name shown in console output
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::X => "X (Twitter)",
            Channel::Discord => "Discord",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Channel::X => "🐦",
            Channel::Discord => "💬",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Proof that a post went out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub channel: Channel,
    /// Platform-assigned identifier (tweet id, message id)
    pub id: String,
    /// Public link to the post, when the platform has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PublishReceipt {
    pub fn new(channel: Channel, id: impl Into<String>) -> Self {
        Self {
            channel,
            id: id.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
