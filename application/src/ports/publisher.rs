//! Publisher port
//!
//! Defines how the application layer posts announcements to a channel.

use async_trait::async_trait;
use herald_domain::{Announcement, Channel, PublishReceipt};
use thiserror::Error;

/// Errors that can occur while publishing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("Bad request (400): {0}")]
    BadRequest(String),

    #[error("Authentication failed (401): {0}")]
    Unauthorized(String),

    #[error("Permission denied (403): {0}")]
    Forbidden(String),

    #[error("Not found (404): {0}")]
    NotFound(String),

    #[error("Rate limited (429): {0}")]
    RateLimited(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0} does not support threads")]
    ThreadsUnsupported(Channel),
}

impl PublishError {
    /// Build an error from an HTTP status and response body
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            400 => PublishError::BadRequest(body),
            401 => PublishError::Unauthorized(body),
            403 => PublishError::Forbidden(body),
            404 => PublishError::NotFound(body),
            429 => PublishError::RateLimited(body),
            status => PublishError::Http { status, body },
        }
    }
}

/// A channel that announcements can be posted to
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// The channel this publisher posts to
    fn channel(&self) -> Channel;

    /// Post one announcement
    async fn publish(&self, announcement: &Announcement) -> Result<PublishReceipt, PublishError>;

    /// Post a list of texts as a reply chain, first post first.
    ///
    /// Default implementation reports that the channel has no threads.
    async fn publish_thread(&self, _posts: &[String]) -> Result<Vec<PublishReceipt>, PublishError> {
        Err(PublishError::ThreadsUnsupported(self.channel()))
    }
}
