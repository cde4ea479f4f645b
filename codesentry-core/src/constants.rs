//! Fixed budgets and limits shared across the pipeline.

/// Wall-clock budget for one external analyzer invocation.
pub const ANALYZER_TIMEOUT_SECS: u64 = 30;

/// Wall-clock budget for one summarization request.
pub const SUMMARY_TIMEOUT_SECS: u64 = 60;

/// Cleaned issue lines are capped at this count before summarization.
pub const MAX_ISSUE_LINES: usize = 30;

/// Column width for document text wrapping.
pub const WRAP_WIDTH: usize = 150;
