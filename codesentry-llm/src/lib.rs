//! CodeSentry LLM - Summarization Model Integration
//!
//! This crate provides the summarization half of the pipeline: a
//! `SummaryModel` trait over whatever backend serves the model, an
//! Ollama-compatible HTTP implementation, and the `SummarizerAdapter`
//! that degrades gracefully when no backend is configured.
//!
//! The adapter is an explicit dependency injected into the pipeline at
//! construction time; nothing here is process-global.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod ollama;

pub use ollama::{OllamaConfig, OllamaSummarizer};

/// Result type for LLM operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Error types for LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Summarization backend not configured or not reachable
    #[error("summarization backend is not available")]
    Unavailable,

    /// Summarization request exceeded its time budget
    #[error("summarization request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Model call failed during execution
    #[error("inference error: {0}")]
    Inference(String),
}

/// Fallback when no backend is configured for lint summarization.
pub const LINT_FALLBACK_MESSAGE: &str =
    "LLM model not available for summarizing static analysis results.";

/// Fallback when no backend is configured for document summarization.
pub const DOCUMENT_FALLBACK_MESSAGE: &str =
    "Summarization model not available for text file analysis.";

/// Returned without a model call when normalization left nothing to say.
pub const NO_FINDINGS_MESSAGE: &str =
    "No relevant warnings or errors found in the static analysis results.";

/// Output length budget for one summarization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

impl SummaryBounds {
    /// Budget for lint-output summaries.
    pub const LINT: Self = Self {
        min_tokens: 30,
        max_tokens: 150,
    };

    /// Budget for full-document summaries.
    pub const DOCUMENT: Self = Self {
        min_tokens: 50,
        max_tokens: 300,
    };
}

/// A pretrained summarization model behind some backend.
///
/// Implementations must decode deterministically (no sampling) and bound
/// their own wall-clock time, reporting expiry as `LlmError::Timeout`.
#[async_trait::async_trait]
pub trait SummaryModel: Send + Sync {
    /// Name of the model being served.
    fn model_name(&self) -> &str;

    /// Produce one summary of `text` within the given length budget.
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> LlmResult<String>;
}

/// Summarizer capability handed to the pipeline.
///
/// Holds an optional backend; every failure mode converts to a
/// descriptive string so summarization can never take a request down.
#[derive(Clone)]
pub struct SummarizerAdapter {
    model: Option<Arc<dyn SummaryModel>>,
}

impl SummarizerAdapter {
    pub fn new(model: Option<Arc<dyn SummaryModel>>) -> Self {
        Self { model }
    }

    /// An adapter with no backend; every call returns a fallback string.
    pub fn disabled() -> Self {
        Self { model: None }
    }

    /// Whether a backend is configured.
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Name of the configured model, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(SummaryModel::model_name)
    }

    /// Summarize normalized lint output.
    ///
    /// No backend → fixed fallback; empty input → fixed no-findings
    /// message, without a model call in either case.
    pub async fn summarize_lint(&self, normalized: &str) -> String {
        let Some(model) = &self.model else {
            return LINT_FALLBACK_MESSAGE.to_string();
        };

        if normalized.trim().is_empty() {
            return NO_FINDINGS_MESSAGE.to_string();
        }

        match model.summarize(normalized, SummaryBounds::LINT).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("lint summarization failed: {e}");
                format!("Error generating summary: {e}")
            }
        }
    }

    /// Summarize extracted document text.
    pub async fn summarize_document(&self, text: &str) -> String {
        let Some(model) = &self.model else {
            return DOCUMENT_FALLBACK_MESSAGE.to_string();
        };

        match model.summarize(text, SummaryBounds::DOCUMENT).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("document summarization failed: {e}");
                format!("Error during text file analysis: {e}")
            }
        }
    }
}
