//! Presentation layer for release-herald
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and sample content for test runs.

pub mod cli;
pub mod output;
pub mod progress;
pub mod samples;

// Re-export commonly used types
pub use cli::commands::{
    AnnounceArgs, Cli, Command, DiscordArgs, LintArgs, PostArgs, ReleaseArgs, SummarizeArgs,
    ThreadArgs,
};
pub use output::console::{ConsoleFormatter, publish_hint};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
