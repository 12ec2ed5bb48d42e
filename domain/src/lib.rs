//! Domain layer for release-herald
//!
//! This crate contains the core release-announcement logic: summary
//! extraction, prompts, fallback text, announcement formatting and markdown
//! checks. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Summary extraction
//!
//! Chat-completion providers put the final answer in different places. The
//! [`extract_summary`] chain recovers a postable string from the primary and
//! reasoning channels of a [`CompletionResult`], preferring explicit
//! `【SUMMARY】` markers over fenced blocks, emoji anchors and paragraphs.
//!
//! ## Announcements
//!
//! A [`Release`] becomes an [`Announcement`] that each [`Channel`] renders in
//! its own way (post text on X, an embed on Discord).

pub mod core;
pub mod markdown;
pub mod release;
pub mod summary;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    string::{char_len, truncate_chars},
};
pub use markdown::validation::{MarkdownReport, validate_markdown};
pub use release::{
    announcement::{
        Announcement, DEFAULT_DESCRIPTION, POST_MAX_CHARS, headline, length_warning,
        unavailable_summary,
    },
    entities::{Channel, PublishReceipt, Release},
    thread::Thread,
};
pub use summary::{
    completion::CompletionResult,
    extractor::{SUMMARY_CLOSE, SUMMARY_OPEN, extract as extract_summary},
    fallback::fallback_summary,
    language::Language,
    prompt::{SUMMARY_MAX_CHARS, SummaryPrompt},
};
