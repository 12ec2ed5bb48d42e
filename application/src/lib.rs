//! Application layer for release-herald
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{NoProgress, ProgressNotifier},
    publisher::{PublishError, Publisher},
};
pub use use_cases::announce_release::{
    AnnounceReleaseInput, AnnounceReleaseOutput, AnnounceReleaseUseCase, CHANNEL_ORDER,
    ChannelOutcome, SkipReason,
};
pub use use_cases::post_thread::PostThreadUseCase;
pub use use_cases::summarize_release::{
    SummarizeError, SummarizeReleaseInput, SummarizeReleaseUseCase, SummaryOutput, SummarySource,
};
