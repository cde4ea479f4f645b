//! Checkstyle integration for Java sources.
//!
//! Uses the Google ruleset bundled with the checkstyle distribution.

use std::path::Path;

use super::{run_tool, Analyzer};
use crate::Result;

pub struct CheckstyleAnalyzer;

#[async_trait::async_trait]
impl Analyzer for CheckstyleAnalyzer {
    fn tool_name(&self) -> &'static str {
        "checkstyle"
    }

    async fn analyze(&self, path: &Path) -> Result<String> {
        run_tool("checkstyle", &["-c", "/google_checks.xml"], path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name() {
        assert_eq!(CheckstyleAnalyzer.tool_name(), "checkstyle");
    }
}
