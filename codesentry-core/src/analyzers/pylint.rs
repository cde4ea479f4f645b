//! Pylint integration for Python sources.
//!
//! Text output format is used deliberately: the downstream normalizer and
//! categorizer work on pylint's colon-delimited issue lines
//! (`file.py:10:5: C0301: Line too long (85/79)`).

use std::path::Path;

use super::{run_tool, Analyzer};
use crate::Result;

pub struct PylintAnalyzer;

#[async_trait::async_trait]
impl Analyzer for PylintAnalyzer {
    fn tool_name(&self) -> &'static str {
        "pylint"
    }

    async fn analyze(&self, path: &Path) -> Result<String> {
        run_tool("pylint", &["--output-format=text"], path).await
    }
}
