//! Issue-line normalization.
//!
//! Analyzer output arrives as colon-delimited issue lines
//! (`file.py:10:5: C0301: Line too long (85/79)`). Normalization keeps
//! the human-readable description and drops location prefixes,
//! parenthetical annotations, and warning-code tokens. Lines without a
//! fourth colon segment are non-issue output (blank lines, summary
//! footers) and are skipped.

use std::sync::OnceLock;

use regex::Regex;

use codesentry_core::constants::MAX_ISSUE_LINES;

fn parenthetical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(.*?\)").unwrap())
}

fn code_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]\d{4}:\s*").unwrap())
}

/// Clean raw analyzer text into at most [`MAX_ISSUE_LINES`] issue
/// descriptions, in input order.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut cleaned = Vec::new();

    for line in raw.lines() {
        let mut segments = line.splitn(4, ':');
        let (Some(_), Some(_), Some(_), Some(description)) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            continue;
        };

        let description = parenthetical_re().replace_all(description.trim(), "");
        let description = code_token_re().replace(description.trim(), "");
        let description = description.trim();

        if description.is_empty() {
            continue;
        }

        cleaned.push(description.to_string());
        if cleaned.len() == MAX_ISSUE_LINES {
            break;
        }
    }

    cleaned
}
