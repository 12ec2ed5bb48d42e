//! Announce Release use case
//!
//! Posts a release to every configured channel, optionally with an AI summary
//! of its notes. Channels are attempted in a fixed order (X, then Discord)
//! and one channel failing never prevents the next from being attempted.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::publisher::Publisher;
use crate::use_cases::summarize_release::{
    SummarizeReleaseInput, SummarizeReleaseUseCase, SummaryOutput,
};
use herald_domain::{Announcement, Channel, Language, PublishReceipt, Release};
use std::sync::Arc;
use tracing::{info, warn};

/// Order in which channels are attempted
pub const CHANNEL_ORDER: [Channel; 2] = [Channel::X, Channel::Discord];

/// Why a channel was not attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Excluded by `--x-only` / `--discord-only`
    Excluded,
    /// No credentials for the channel
    NotConfigured,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::Excluded => "excluded by command-line option",
            SkipReason::NotConfigured => "credentials not configured",
        }
    }
}

/// What happened on one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Posted(PublishReceipt),
    Failed(String),
    Skipped(SkipReason),
}

impl ChannelOutcome {
    pub fn is_attempted(&self) -> bool {
        !matches!(self, ChannelOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ChannelOutcome::Failed(_))
    }
}

/// Input for the AnnounceRelease use case
#[derive(Debug, Clone)]
pub struct AnnounceReleaseInput {
    pub release: Release,
    /// Summarize the release notes before posting
    pub summarize: bool,
    /// Post to this channel only
    pub only: Option<Channel>,
    pub language: Option<Language>,
}

impl AnnounceReleaseInput {
    pub fn new(release: Release) -> Self {
        Self {
            release,
            summarize: false,
            only: None,
            language: None,
        }
    }

    pub fn with_summary(mut self, summarize: bool) -> Self {
        self.summarize = summarize;
        self
    }

    pub fn only(mut self, channel: Option<Channel>) -> Self {
        self.only = channel;
        self
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}

/// Output of the AnnounceRelease use case
#[derive(Debug, Clone)]
pub struct AnnounceReleaseOutput {
    pub summary: Option<SummaryOutput>,
    pub outcomes: Vec<(Channel, ChannelOutcome)>,
}

impl AnnounceReleaseOutput {
    pub fn outcome(&self, channel: Channel) -> Option<&ChannelOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, o)| o)
    }

    /// True when at least one channel was attempted and every attempt failed
    pub fn all_failed(&self) -> bool {
        let mut attempted = self.outcomes.iter().map(|(_, o)| o).filter(|o| o.is_attempted());
        let first = attempted.next();
        first.is_some_and(|o| o.is_failed()) && attempted.all(|o| o.is_failed())
    }
}

/// Use case for announcing a release on every configured channel
pub struct AnnounceReleaseUseCase {
    publishers: Vec<Arc<dyn Publisher>>,
    summarizer: Option<SummarizeReleaseUseCase<dyn CompletionGateway>>,
}

impl AnnounceReleaseUseCase {
    pub fn new(publishers: Vec<Arc<dyn Publisher>>) -> Self {
        Self {
            publishers,
            summarizer: None,
        }
    }

    /// Enable AI summaries through `gateway`
    pub fn with_gateway(mut self, gateway: Option<Arc<dyn CompletionGateway>>) -> Self {
        self.summarizer = gateway.map(SummarizeReleaseUseCase::new);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AnnounceReleaseInput) -> AnnounceReleaseOutput {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AnnounceReleaseInput,
        progress: &dyn ProgressNotifier,
    ) -> AnnounceReleaseOutput {
        let summary = self.summarize(&input, progress).await;
        let announcement = Announcement::release(
            input.release.clone(),
            summary.as_ref().map(|s| s.summary.clone()),
        );

        let mut outcomes = Vec::with_capacity(CHANNEL_ORDER.len());
        for channel in CHANNEL_ORDER {
            let outcome = self
                .post_to(channel, &input, &announcement, progress)
                .await;
            outcomes.push((channel, outcome));
        }

        AnnounceReleaseOutput { summary, outcomes }
    }

    async fn summarize(
        &self,
        input: &AnnounceReleaseInput,
        progress: &dyn ProgressNotifier,
    ) -> Option<SummaryOutput> {
        if !input.summarize {
            return None;
        }
        let notes = input.release.notes()?;
        let summary_input = SummarizeReleaseInput::new(notes).with_language(input.language);

        let output = match &self.summarizer {
            Some(summarizer) => {
                progress.on_summary_start(summarizer.model());
                summarizer.execute_or_fallback(&summary_input).await.ok()?
            }
            None => {
                warn!("No AI provider configured, using fallback summary");
                SummaryOutput::fallback(
                    notes,
                    input
                        .language
                        .unwrap_or_else(|| Language::detect(notes)),
                    "AI provider not configured",
                )
            }
        };

        progress.on_summary_complete(&output);
        Some(output)
    }

    async fn post_to(
        &self,
        channel: Channel,
        input: &AnnounceReleaseInput,
        announcement: &Announcement,
        progress: &dyn ProgressNotifier,
    ) -> ChannelOutcome {
        if input.only.is_some_and(|only| only != channel) {
            progress.on_channel_skipped(channel, SkipReason::Excluded.describe());
            return ChannelOutcome::Skipped(SkipReason::Excluded);
        }

        let Some(publisher) = self.publishers.iter().find(|p| p.channel() == channel) else {
            progress.on_channel_skipped(channel, SkipReason::NotConfigured.describe());
            return ChannelOutcome::Skipped(SkipReason::NotConfigured);
        };

        progress.on_publish_start(channel, &announcement.post_text());
        match publisher.publish(announcement).await {
            Ok(receipt) => {
                info!("Posted to {}: {}", channel, receipt.id);
                progress.on_publish_complete(&receipt);
                ChannelOutcome::Posted(receipt)
            }
            Err(e) => {
                warn!("Posting to {} failed: {}", channel, e);
                progress.on_publish_failed(channel, &e.to_string());
                ChannelOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::{CompletionRequest, GatewayError};
    use crate::ports::publisher::PublishError;
    use async_trait::async_trait;
    use herald_domain::CompletionResult;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockPublisher {
        channel: Channel,
        fail: bool,
        posted: Mutex<Vec<Announcement>>,
    }

    impl MockPublisher {
        fn new(channel: Channel) -> Arc<Self> {
            Arc::new(Self {
                channel,
                fail: false,
                posted: Mutex::new(Vec::new()),
            })
        }

        fn failing(channel: Channel) -> Arc<Self> {
            Arc::new(Self {
                channel,
                fail: true,
                posted: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Publisher for MockPublisher {
        fn channel(&self) -> Channel {
            self.channel
        }

        async fn publish(
            &self,
            announcement: &Announcement,
        ) -> Result<PublishReceipt, PublishError> {
            self.posted.lock().unwrap().push(announcement.clone());
            if self.fail {
                Err(PublishError::RateLimited("too many posts".to_string()))
            } else {
                Ok(PublishReceipt::new(self.channel, "42"))
            }
        }
    }

    struct FixedGateway(Result<CompletionResult, GatewayError>);

    #[async_trait]
    impl CompletionGateway for FixedGateway {
        fn model(&self) -> &str {
            "fixed"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResult, GatewayError> {
            self.0.clone()
        }
    }

    fn release() -> Release {
        Release::try_new("v0.2.0", "https://example.com/v0.2.0")
            .unwrap()
            .with_notes("## Features\n- Discord webhook support")
    }

    #[tokio::test]
    async fn test_posts_to_all_configured_channels() {
        let x = MockPublisher::new(Channel::X);
        let discord = MockPublisher::new(Channel::Discord);
        let use_case = AnnounceReleaseUseCase::new(vec![x.clone(), discord.clone()]);

        let output = use_case.execute(AnnounceReleaseInput::new(release())).await;

        assert!(output.summary.is_none());
        assert!(matches!(output.outcome(Channel::X), Some(ChannelOutcome::Posted(_))));
        assert!(matches!(output.outcome(Channel::Discord), Some(ChannelOutcome::Posted(_))));
        assert!(!output.all_failed());
        assert_eq!(
            x.posted.lock().unwrap()[0].post_text(),
            "🚀 v0.2.0\n\nhttps://example.com/v0.2.0"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_channel_is_skipped() {
        let discord = MockPublisher::new(Channel::Discord);
        let use_case = AnnounceReleaseUseCase::new(vec![discord.clone()]);

        let output = use_case.execute(AnnounceReleaseInput::new(release())).await;

        assert_eq!(
            output.outcome(Channel::X),
            Some(&ChannelOutcome::Skipped(SkipReason::NotConfigured))
        );
        assert_eq!(discord.posted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_only_flag_excludes_other_channel() {
        let x = MockPublisher::new(Channel::X);
        let discord = MockPublisher::new(Channel::Discord);
        let use_case = AnnounceReleaseUseCase::new(vec![x.clone(), discord.clone()]);

        let output = use_case
            .execute(AnnounceReleaseInput::new(release()).only(Some(Channel::Discord)))
            .await;

        assert_eq!(
            output.outcome(Channel::X),
            Some(&ChannelOutcome::Skipped(SkipReason::Excluded))
        );
        assert!(x.posted.lock().unwrap().is_empty());
        assert_eq!(discord.posted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_stop_the_other() {
        let x = MockPublisher::failing(Channel::X);
        let discord = MockPublisher::new(Channel::Discord);
        let use_case = AnnounceReleaseUseCase::new(vec![x, discord.clone()]);

        let output = use_case.execute(AnnounceReleaseInput::new(release())).await;

        assert!(output.outcome(Channel::X).unwrap().is_failed());
        assert_eq!(discord.posted.lock().unwrap().len(), 1);
        assert!(!output.all_failed());
    }

    #[tokio::test]
    async fn test_all_failed() {
        let use_case = AnnounceReleaseUseCase::new(vec![
            MockPublisher::failing(Channel::X),
            MockPublisher::failing(Channel::Discord),
        ]);
        let output = use_case.execute(AnnounceReleaseInput::new(release())).await;
        assert!(output.all_failed());

        // nothing attempted is not a failure
        let use_case = AnnounceReleaseUseCase::new(vec![]);
        let output = use_case.execute(AnnounceReleaseInput::new(release())).await;
        assert!(!output.all_failed());
    }

    #[tokio::test]
    async fn test_single_attempted_channel_failing_is_all_failed() {
        let use_case = AnnounceReleaseUseCase::new(vec![
            MockPublisher::failing(Channel::X),
            MockPublisher::new(Channel::Discord),
        ]);
        let output = use_case
            .execute(AnnounceReleaseInput::new(release()).only(Some(Channel::X)))
            .await;

        assert!(output.outcome(Channel::Discord).is_some_and(|o| !o.is_attempted()));
        assert!(output.all_failed());
    }

    #[tokio::test]
    async fn test_summary_is_posted_with_url() {
        let x = MockPublisher::new(Channel::X);
        let gateway: Arc<dyn CompletionGateway> = Arc::new(FixedGateway(Ok(
            CompletionResult::from_text("🚀 v0.2.0 adds Discord support"),
        )));
        let use_case = AnnounceReleaseUseCase::new(vec![x.clone()]).with_gateway(Some(gateway));

        let output = use_case
            .execute(AnnounceReleaseInput::new(release()).with_summary(true))
            .await;

        assert!(!output.summary.unwrap().is_fallback());
        assert_eq!(
            x.posted.lock().unwrap()[0].post_text(),
            "🚀 v0.2.0 adds Discord support\n\nhttps://example.com/v0.2.0"
        );
    }

    #[tokio::test]
    async fn test_missing_gateway_uses_fallback_summary() {
        let x = MockPublisher::new(Channel::X);
        let use_case = AnnounceReleaseUseCase::new(vec![x.clone()]);

        let output = use_case
            .execute(AnnounceReleaseInput::new(release()).with_summary(true))
            .await;

        let summary = output.summary.unwrap();
        assert!(summary.is_fallback());
        assert_eq!(summary.summary, "Features - Discord webhook support");
    }

    #[tokio::test]
    async fn test_summary_requires_notes() {
        let x = MockPublisher::new(Channel::X);
        let use_case = AnnounceReleaseUseCase::new(vec![x.clone()]);
        let release = Release::try_new("v1", "https://example.com").unwrap();

        let output = use_case
            .execute(AnnounceReleaseInput::new(release).with_summary(true))
            .await;

        assert!(output.summary.is_none());
        assert_eq!(x.posted.lock().unwrap()[0].post_text(), "🚀 v1\n\nhttps://example.com");
    }
}
