//! Report assembly.
//!
//! A code report concatenates, in fixed order: the summary, the three
//! category sections, and the complete raw tool output. Only the summary
//! and category content are bounded upstream; the raw section is
//! verbatim and untruncated. An empty bucket renders an explicit
//! placeholder so no section header dangles.

use serde::{Deserialize, Serialize};

use crate::categorize::CategoryBuckets;

/// Placeholder rendered under a category header with no matching lines.
pub const EMPTY_CATEGORY_PLACEHOLDER: &str = "(no issues found)";

/// Assembled analysis result for one request.
///
/// `categories` and `raw_output` are present for code analysis and
/// absent for document summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub summary: String,
    pub categories: Option<CategoryBuckets>,
    pub raw_output: Option<String>,
}

impl Report {
    /// A code-analysis report with all three sections.
    pub fn code(summary: String, categories: CategoryBuckets, raw_output: String) -> Self {
        Self {
            summary,
            categories: Some(categories),
            raw_output: Some(raw_output),
        }
    }

    /// A document report carrying only a summary.
    pub fn document(summary: String) -> Self {
        Self {
            summary,
            categories: None,
            raw_output: None,
        }
    }

    /// Render the report as one displayable text block.
    pub fn render(&self) -> String {
        match (&self.categories, &self.raw_output) {
            (Some(categories), Some(raw)) => render_code_report(&self.summary, categories, raw),
            _ => format!("Text File Analysis Summary:\n{}", self.summary),
        }
    }
}

fn render_code_report(summary: &str, categories: &CategoryBuckets, raw: &str) -> String {
    let mut out = String::new();

    out.push_str("Static Analysis Results Summary:\n");
    out.push_str(summary);
    out.push_str("\n\n");

    out.push_str("Categorized Static Analysis Results:\n");
    for (category, lines) in categories.iter() {
        out.push_str("\n- ");
        out.push_str(category.section_title());
        out.push_str(":\n");
        if lines.is_empty() {
            out.push_str(EMPTY_CATEGORY_PLACEHOLDER);
        } else {
            out.push_str(&lines.join("\n"));
        }
        out.push('\n');
    }

    out.push_str("\nFull Static Analysis Results:\n");
    out.push_str(raw);

    out
}
