//! HTML Tidy integration for markup files.

use std::path::Path;

use super::{run_tool, Analyzer};
use crate::Result;

pub struct TidyAnalyzer;

#[async_trait::async_trait]
impl Analyzer for TidyAnalyzer {
    fn tool_name(&self) -> &'static str {
        "tidy"
    }

    async fn analyze(&self, path: &Path) -> Result<String> {
        run_tool("tidy", &["-errors", "-quiet"], path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name() {
        assert_eq!(TidyAnalyzer.tool_name(), "tidy");
    }
}
