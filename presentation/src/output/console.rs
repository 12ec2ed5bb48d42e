//! Console output formatting for release-herald

use colored::Colorize;
use herald_application::{
    AnnounceReleaseOutput, ChannelOutcome, GatewayError, PublishError, SummaryOutput,
    SummarySource,
};
use herald_domain::{Channel, MarkdownReport, PublishReceipt, char_len};
use std::path::Path;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Text framed by `---` lines
    pub fn framed(label: &str, body: &str) -> String {
        format!("{}\n---\n{}\n---", label.cyan().bold(), body)
    }

    /// Preview of what is about to be posted
    pub fn post_preview(channel: Channel, text: &str) -> String {
        Self::framed(
            &format!("{} Posting to {}", channel.icon(), channel),
            text,
        )
    }

    /// Summary with its source and length
    pub fn summary(output: &SummaryOutput) -> String {
        let mut out = Self::framed("📋 Summary", &output.summary);
        out.push('\n');

        match &output.source {
            SummarySource::Model { model } => {
                out.push_str(&format!(
                    "{} Summary generated by {} ({} characters",
                    "✅".green(),
                    model,
                    char_len(&output.summary)
                ));
                if let Some(tokens) = output.total_tokens {
                    out.push_str(&format!(", {} tokens", tokens));
                }
                out.push(')');
            }
            SummarySource::Fallback { reason } => {
                out.push_str(&format!(
                    "{} Fallback summary ({} characters): {}",
                    "⚠️ ".yellow(),
                    char_len(&output.summary),
                    reason
                ));
            }
        }
        out
    }

    /// One successful post
    pub fn receipt(receipt: &PublishReceipt) -> String {
        let mut out = format!(
            "{} Posted to {}\n   ID: {}",
            "✅".green(),
            receipt.channel,
            receipt.id
        );
        if let Some(url) = &receipt.url {
            out.push_str(&format!("\n   URL: {}", url));
        }
        out
    }

    /// Receipts of a thread, first post first
    pub fn thread(receipts: &[PublishReceipt]) -> String {
        let mut out = format!("{} Thread posted ({} posts)", "✅".green(), receipts.len());
        for (index, receipt) in receipts.iter().enumerate() {
            out.push_str(&format!(
                "\n   {}. {}",
                index + 1,
                receipt.url.as_deref().unwrap_or(&receipt.id)
            ));
        }
        if let Some(url) = receipts.first().and_then(|r| r.url.as_deref()) {
            out.push_str(&format!("\n\n🔗 Thread start: {}", url));
        }
        out
    }

    /// A failed post with a hint when one applies
    pub fn publish_failure(channel: Channel, error: &PublishError) -> String {
        let mut out = format!("{} Posting to {} failed\n   {}", "❌".red(), channel, error);
        if let Some(hint) = publish_hint(channel, error) {
            out.push_str(&format!("\n   {} {}", "hint:".yellow(), hint));
        }
        out
    }

    /// A failed summary request with a hint when one applies
    pub fn gateway_failure(error: &GatewayError) -> String {
        let mut out = format!("{} Summary generation failed\n   {}", "❌".red(), error);
        if let Some(hint) = error.hint() {
            out.push_str(&format!("\n   {} {}", "hint:".yellow(), hint));
        }
        out
    }

    /// Per-channel results of an announcement
    pub fn announce_results(output: &AnnounceReleaseOutput) -> String {
        let mut out = format!("{}\n{}", "📊 Results".cyan().bold(), "-".repeat(40));
        for (channel, outcome) in &output.outcomes {
            let line = match outcome {
                ChannelOutcome::Posted(receipt) => format!(
                    "{} {:<14} {}",
                    "✅".green(),
                    channel.display_name(),
                    receipt.url.as_deref().unwrap_or(&receipt.id)
                ),
                ChannelOutcome::Failed(error) => {
                    format!("{} {:<14} {}", "❌".red(), channel.display_name(), error)
                }
                ChannelOutcome::Skipped(reason) => format!(
                    "{} {:<14} {}",
                    "⏭️ ".dimmed(),
                    channel.display_name(),
                    reason.describe()
                ),
            };
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    /// Lint findings for one file
    pub fn lint_report(path: &Path, report: &MarkdownReport) -> String {
        let mut out = format!("{} {}", "🔍".cyan(), path.display());
        if report.is_clean() {
            out.push_str(&format!("\n   {} No issues found!", "🎉".green()));
            return out;
        }
        if !report.errors.is_empty() {
            out.push_str(&format!("\n{}", "❌ Errors:".red().bold()));
            for e in &report.errors {
                out.push_str(&format!("\n   - {}", e));
            }
        }
        if !report.warnings.is_empty() {
            out.push_str(&format!("\n{}", "⚠️  Warnings:".yellow().bold()));
            for w in &report.warnings {
                out.push_str(&format!("\n   - {}", w));
            }
        }
        out
    }
}

/// Suggested fix for a publishing error on `channel`
pub fn publish_hint(channel: Channel, error: &PublishError) -> Option<&'static str> {
    match (channel, error) {
        (Channel::X, PublishError::Forbidden(_)) => Some(
            "Set the app permissions to \"Read and write\" in the X developer portal, then regenerate the access token",
        ),
        (Channel::X, PublishError::Unauthorized(_)) => {
            Some("The API key or access token is invalid")
        }
        (Channel::X, PublishError::RateLimited(_)) => {
            Some("The Free plan allows 500 posts per month; wait a few hours and retry")
        }
        (Channel::Discord, PublishError::BadRequest(_)) => {
            Some("Check the webhook URL and the embed format")
        }
        (Channel::Discord, PublishError::NotFound(_)) => {
            Some("The webhook was not found; check that the URL is correct")
        }
        (Channel::Discord, PublishError::RateLimited(_)) => {
            Some("Wait a few seconds and retry")
        }
        (_, PublishError::Network(_)) => Some("Check the internet connection"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_application::SkipReason;
    use herald_domain::Language;

    #[test]
    fn test_receipt_with_url() {
        let receipt = PublishReceipt::new(Channel::X, "42").with_url("https://x.com/i/status/42");
        let text = ConsoleFormatter::receipt(&receipt);
        assert!(text.contains("Posted to X (Twitter)"));
        assert!(text.contains("ID: 42"));
        assert!(text.contains("URL: https://x.com/i/status/42"));
    }

    #[test]
    fn test_thread_lists_every_post() {
        let receipts = vec![
            PublishReceipt::new(Channel::X, "1").with_url("https://x.com/i/status/1"),
            PublishReceipt::new(Channel::X, "2").with_url("https://x.com/i/status/2"),
        ];
        let text = ConsoleFormatter::thread(&receipts);
        assert!(text.contains("1. https://x.com/i/status/1"));
        assert!(text.contains("2. https://x.com/i/status/2"));
        assert!(text.contains("Thread start: https://x.com/i/status/1"));
    }

    #[test]
    fn test_summary_shows_fallback_reason() {
        let output = SummaryOutput::fallback("## v1\n- fix", Language::English, "rate limited");
        let text = ConsoleFormatter::summary(&output);
        assert!(text.contains("v1 - fix"));
        assert!(text.contains("rate limited"));
    }

    #[test]
    fn test_announce_results_rows() {
        let output = AnnounceReleaseOutput {
            summary: None,
            outcomes: vec![
                (Channel::X, ChannelOutcome::Failed("Rate limited (429): slow".to_string())),
                (Channel::Discord, ChannelOutcome::Skipped(SkipReason::NotConfigured)),
            ],
        };
        let text = ConsoleFormatter::announce_results(&output);
        assert!(text.contains("Rate limited (429): slow"));
        assert!(text.contains("credentials not configured"));
    }

    #[test]
    fn test_lint_report_lists_errors() {
        let report = herald_domain::validate_markdown("```\nopen");
        let text = ConsoleFormatter::lint_report(Path::new("README.md"), &report);
        assert!(text.contains("README.md"));
        assert!(text.contains("Unclosed code block"));
    }

    #[test]
    fn test_publish_hints_are_channel_specific() {
        let forbidden = PublishError::Forbidden("no".to_string());
        assert!(publish_hint(Channel::X, &forbidden).is_some_and(|h| h.contains("Read and write")));
        assert_eq!(publish_hint(Channel::Discord, &forbidden), None);

        let not_found = PublishError::NotFound("gone".to_string());
        assert!(publish_hint(Channel::Discord, &not_found).is_some());
        assert!(publish_hint(Channel::X, &PublishError::Network("dns".to_string())).is_some());
    }

    #[test]
    fn test_publish_failure_includes_hint() {
        let text = ConsoleFormatter::publish_failure(
            Channel::Discord,
            &PublishError::RateLimited("slow down".to_string()),
        );
        assert!(text.contains("slow down"));
        assert!(text.contains("Wait a few seconds"));
    }
}
