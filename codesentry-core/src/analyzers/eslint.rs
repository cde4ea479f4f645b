//! ESLint integration for JavaScript sources.

use std::path::Path;

use super::{run_tool, Analyzer};
use crate::Result;

pub struct EslintAnalyzer;

#[async_trait::async_trait]
impl Analyzer for EslintAnalyzer {
    fn tool_name(&self) -> &'static str {
        "eslint"
    }

    async fn analyze(&self, path: &Path) -> Result<String> {
        run_tool("eslint", &[], path).await
    }
}
