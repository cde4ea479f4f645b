//! CodeSentry Utilities
//!
//! Shared helpers used across the workspace: logging initialization,
//! display-oriented text wrapping, and upload file naming.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod file;
pub mod logging;
pub mod string;

pub use file::{sanitize_file_name, unique_upload_name};
pub use string::wrap_text;

/// Result type used throughout CodeSentry utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
