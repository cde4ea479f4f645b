//! CodeSentry Core - Analyzer Dispatch and Document Extraction
//!
//! This crate provides the tool-facing half of CodeSentry:
//! - File kind detection from extensions
//! - The analyzer registry dispatching one external tool per file kind
//! - Document text extraction (plain text, docx, PDF)
//!
//! Tool output post-processing lives in `codesentry-analysis`; model
//! integration lives in `codesentry-llm`.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzers;
pub mod constants;
pub mod extract;
pub mod kind;

pub use analyzers::{Analyzer, AnalyzerRegistry, ToolStatus};
pub use kind::FileKind;

/// Result type used throughout CodeSentry core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CodeSentry core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension not recognized
    #[error("Unsupported file kind: {extension}")]
    UnsupportedKind { extension: String },

    /// External analyzer exceeded its time budget
    #[error("{file} analysis timed out after {seconds} seconds")]
    ToolTimeout { file: String, seconds: u64 },

    /// External analyzer failed to run
    #[error("{tool}: {message}")]
    ToolExecution { tool: String, message: String },

    /// Document text extraction failed
    #[error("failed to extract text from {file}: {message}")]
    Extraction { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Global configuration for a CodeSentry pipeline
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SentryConfig {
    /// Wall-clock budget for one analyzer invocation, in seconds
    pub analyzer_timeout_secs: u64,
    /// Wall-clock budget for one summarization request, in seconds
    pub summary_timeout_secs: u64,
    /// Maximum number of cleaned issue lines fed to the summarizer
    pub max_issue_lines: usize,
    /// Column width for document text wrapping
    pub wrap_width: usize,
    /// Directory uploaded files are stored in
    pub upload_dir: std::path::PathBuf,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            analyzer_timeout_secs: constants::ANALYZER_TIMEOUT_SECS,
            summary_timeout_secs: constants::SUMMARY_TIMEOUT_SECS,
            max_issue_lines: constants::MAX_ISSUE_LINES,
            wrap_width: constants::WRAP_WIDTH,
            upload_dir: std::path::PathBuf::from("upload"),
        }
    }
}
