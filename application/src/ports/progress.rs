//! Progress notification port
//!
//! Defines the interface for reporting what a release announcement is doing.

use crate::use_cases::summarize_release::SummaryOutput;
use herald_domain::{Channel, PublishReceipt};

/// Callback for progress updates while summarizing and publishing
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so implementations only override what they display.
pub trait ProgressNotifier: Send + Sync {
    /// Called before the completion request is sent
    fn on_summary_start(&self, _model: &str) {}

    /// Called once a summary (model or fallback) is available
    fn on_summary_complete(&self, _output: &SummaryOutput) {}

    /// Called right before posting `text` to `channel`
    fn on_publish_start(&self, _channel: Channel, _text: &str) {}

    /// Called after a successful post
    fn on_publish_complete(&self, _receipt: &PublishReceipt) {}

    /// Called after a failed post
    fn on_publish_failed(&self, _channel: Channel, _error: &str) {}

    /// Called when a channel is not attempted
    fn on_channel_skipped(&self, _channel: Channel, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {}
