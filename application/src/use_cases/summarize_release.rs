//! Summarize Release use case
//!
//! Asks the completion provider for a social-media summary of release notes
//! and recovers it from the raw response.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use herald_domain::{Language, SUMMARY_MAX_CHARS, SummaryPrompt, fallback_summary};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while summarizing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Release notes are empty")]
    EmptyNotes,

    #[error("The model returned no usable summary")]
    EmptySummary,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the SummarizeRelease use case
#[derive(Debug, Clone)]
pub struct SummarizeReleaseInput {
    pub notes: String,
    /// Output language; detected from the notes when `None`
    pub language: Option<Language>,
    pub max_tokens: Option<u32>,
    pub temperature: f32,
}

impl SummarizeReleaseInput {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            language: None,
            max_tokens: None,
            temperature: CompletionRequest::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn resolved_language(&self) -> Language {
        self.language.unwrap_or_else(|| Language::detect(&self.notes))
    }
}

/// Where a summary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySource {
    /// Extracted from a model response
    Model { model: String },
    /// Markdown-stripped truncation of the notes
    Fallback { reason: String },
}

/// Output of the SummarizeRelease use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutput {
    pub summary: String,
    pub language: Language,
    pub source: SummarySource,
    pub total_tokens: Option<u64>,
}

impl SummaryOutput {
    /// Fallback summary of `notes`, recording why the model was not used
    pub fn fallback(notes: &str, language: Language, reason: impl Into<String>) -> Self {
        Self {
            summary: fallback_summary(notes, SUMMARY_MAX_CHARS),
            language,
            source: SummarySource::Fallback {
                reason: reason.into(),
            },
            total_tokens: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, SummarySource::Fallback { .. })
    }
}

/// Use case for summarizing release notes
pub struct SummarizeReleaseUseCase<G: CompletionGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + ?Sized> SummarizeReleaseUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn model(&self) -> &str {
        self.gateway.model()
    }

    /// Summarize, failing if the provider errors or returns nothing usable
    pub async fn execute(
        &self,
        input: &SummarizeReleaseInput,
    ) -> Result<SummaryOutput, SummarizeError> {
        if input.notes.trim().is_empty() {
            return Err(SummarizeError::EmptyNotes);
        }

        let language = input.resolved_language();
        info!(
            "Summarizing release notes with {} ({})",
            self.gateway.model(),
            language
        );

        let request = CompletionRequest::new(
            SummaryPrompt::system(language),
            SummaryPrompt::user(&input.notes, language),
        )
        .with_max_tokens(input.max_tokens)
        .with_temperature(input.temperature);

        let completion = self.gateway.complete(&request).await?;
        if completion.reasoning().is_some_and(|r| !r.trim().is_empty()) {
            debug!("Response carries a reasoning field");
        }

        let summary = completion.summary();
        if summary.is_empty() {
            return Err(SummarizeError::EmptySummary);
        }

        Ok(SummaryOutput {
            summary,
            language,
            source: SummarySource::Model {
                model: completion
                    .model
                    .unwrap_or_else(|| self.gateway.model().to_string()),
            },
            total_tokens: completion.total_tokens,
        })
    }

    /// Summarize, degrading to the fallback summary on any provider failure.
    ///
    /// Only empty notes are an error.
    pub async fn execute_or_fallback(
        &self,
        input: &SummarizeReleaseInput,
    ) -> Result<SummaryOutput, SummarizeError> {
        match self.execute(input).await {
            Ok(output) => Ok(output),
            Err(SummarizeError::EmptyNotes) => Err(SummarizeError::EmptyNotes),
            Err(e) => {
                warn!("Summarization failed, using fallback: {}", e);
                Ok(SummaryOutput::fallback(
                    &input.notes,
                    input.resolved_language(),
                    e.to_string(),
                ))
            }
        }
    }
}
