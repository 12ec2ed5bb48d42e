//! Announcement texts posted for a release

use super::entities::Release;
use crate::core::error::DomainError;
use crate::core::string::char_len;

/// Longest post accepted without a warning
pub const POST_MAX_CHARS: usize = 500;

/// Discord description used when no summary is available
pub const DEFAULT_DESCRIPTION: &str = "新しいリリースが利用可能です！";

/// What gets posted to a channel (Value Object)
///
/// Channels render it differently: X posts text, Discord builds an embed for
/// a release and a plain message for free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// A release, optionally with a summary of its notes
    Release {
        release: Release,
        summary: Option<String>,
    },
    /// Free text posted as-is
    Text(String),
}

impl Announcement {
    pub fn release(release: Release, summary: Option<String>) -> Self {
        let summary = summary.filter(|s| !s.trim().is_empty());
        Announcement::Release { release, summary }
    }

    pub fn text(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyPost);
        }
        Ok(Announcement::Text(text))
    }

    /// Text for a microblog post.
    ///
    /// A summarized release becomes `"{summary}\n\n{url}"`, an unsummarized
    /// one `"🚀 {title}\n\n{url}"`.
    pub fn post_text(&self) -> String {
        match self {
            Announcement::Release {
                release,
                summary: Some(summary),
            } => format!("{}\n\n{}", summary, release.url()),
            Announcement::Release {
                release,
                summary: None,
            } => headline(release),
            Announcement::Text(text) => text.clone(),
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Announcement::Release { summary, .. } => summary.as_deref(),
            Announcement::Text(_) => None,
        }
    }
}

/// `"🚀 {title}\n\n{url}"`
pub fn headline(release: &Release) -> String {
    format!("🚀 {}\n\n{}", release.title(), release.url())
}

/// Discord description used when summarization was requested but failed
pub fn unavailable_summary(release: &Release) -> String {
    format!("🚀 {}\n\n{}", release.title(), DEFAULT_DESCRIPTION)
}

/// Warning text when a post is longer than [`POST_MAX_CHARS`]
pub fn length_warning(text: &str) -> Option<String> {
    let len = char_len(text);
    (len > POST_MAX_CHARS).then(|| format!("Post too long: {}/{} characters", len, POST_MAX_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> Release {
        Release::try_new("v0.2.0", "https://github.com/acme/tool/releases/tag/v0.2.0").unwrap()
    }

    #[test]
    fn test_headline_without_summary() {
        let announcement = Announcement::release(release(), None);
        assert_eq!(
            announcement.post_text(),
            "🚀 v0.2.0\n\nhttps://github.com/acme/tool/releases/tag/v0.2.0"
        );
    }

    #[test]
    fn test_summary_followed_by_url() {
        let announcement = Announcement::release(release(), Some("🚀 Faster builds".to_string()));
        assert_eq!(
            announcement.post_text(),
            "🚀 Faster builds\n\nhttps://github.com/acme/tool/releases/tag/v0.2.0"
        );
    }

    #[test]
    fn test_blank_summary_is_dropped() {
        let announcement = Announcement::release(release(), Some("   ".to_string()));
        assert_eq!(announcement.summary(), None);
    }

    #[test]
    fn test_text_rejects_blank() {
        assert_eq!(Announcement::text(" ").unwrap_err(), DomainError::EmptyPost);
        assert_eq!(Announcement::text("hi").unwrap().post_text(), "hi");
    }

    #[test]
    fn test_unavailable_summary() {
        assert_eq!(
            unavailable_summary(&release()),
            "🚀 v0.2.0\n\n新しいリリースが利用可能です！"
        );
    }

    #[test]
    fn test_length_warning_counts_characters() {
        assert_eq!(length_warning(&"あ".repeat(500)), None);
        assert_eq!(
            length_warning(&"a".repeat(501)).as_deref(),
            Some("Post too long: 501/500 characters")
        );
    }
}
