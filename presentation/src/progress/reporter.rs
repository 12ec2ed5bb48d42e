//! Progress reporting while summarizing and publishing

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use herald_application::{ProgressNotifier, SummaryOutput};
use herald_domain::{Channel, PublishReceipt, length_warning};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while the model is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Show a spinner until [`Self::finish_spinner`]
    pub fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    pub fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_summary_start(&self, model: &str) {
        self.start_spinner(format!("🤖 Generating AI summary... (model: {})", model));
    }

    fn on_summary_complete(&self, output: &SummaryOutput) {
        self.finish_spinner();
        println!("{}\n", ConsoleFormatter::summary(output));
    }

    fn on_publish_start(&self, channel: Channel, text: &str) {
        println!("{}", ConsoleFormatter::post_preview(channel, text));
        if let Some(warning) = length_warning(text) {
            println!("{} {}", "⚠️ ".yellow(), warning);
        }
    }

    fn on_publish_complete(&self, receipt: &PublishReceipt) {
        println!("{}\n", ConsoleFormatter::receipt(receipt));
    }

    fn on_publish_failed(&self, channel: Channel, error: &str) {
        println!("{} Posting to {} failed\n   {}\n", "❌".red(), channel, error);
    }

    fn on_channel_skipped(&self, channel: Channel, reason: &str) {
        println!("{} {} skipped ({})\n", "⏭️ ".dimmed(), channel, reason);
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_summary_start(&self, model: &str) {
        println!("{} Generating AI summary with {}", "->".cyan(), model);
    }

    fn on_summary_complete(&self, output: &SummaryOutput) {
        println!("{}\n", ConsoleFormatter::summary(output));
    }

    fn on_publish_start(&self, channel: Channel, _text: &str) {
        println!("{} Posting to {}", "->".cyan(), channel);
    }

    fn on_publish_complete(&self, receipt: &PublishReceipt) {
        println!("  {} {}", "v".green(), receipt.id);
    }

    fn on_publish_failed(&self, channel: Channel, error: &str) {
        println!("  {} {} ({})", "x".red(), channel, error);
    }

    fn on_channel_skipped(&self, channel: Channel, reason: &str) {
        println!("  {} {} skipped ({})", "-".dimmed(), channel, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.start_spinner("working".to_string());
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.finish_spinner();
        assert!(reporter.spinner.lock().unwrap().is_none());
        // Finishing twice is harmless
        reporter.finish_spinner();
    }
}
