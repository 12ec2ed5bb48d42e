//! Release-note summarization: prompts, extraction and fallback.
//!
//! - [`extractor`] — recovers the postable summary from a completion
//! - [`completion::CompletionResult`] — the two text channels of a response
//! - [`language::Language`] — detected output language
//! - [`prompt::SummaryPrompt`] — system/user prompts sent to the model
//! - [`fallback`] — markdown-stripped truncation used when the model fails

pub mod completion;
pub mod extractor;
pub mod fallback;
pub mod language;
pub mod prompt;
