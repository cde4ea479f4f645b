//! Cppcheck integration for C/C++ sources.
//!
//! cppcheck prints findings on stderr; the shared runner falls back to
//! stderr when stdout is empty, so nothing is lost here.

use std::path::Path;

use super::{run_tool, Analyzer};
use crate::Result;

pub struct CppcheckAnalyzer;

#[async_trait::async_trait]
impl Analyzer for CppcheckAnalyzer {
    fn tool_name(&self) -> &'static str {
        "cppcheck"
    }

    async fn analyze(&self, path: &Path) -> Result<String> {
        run_tool("cppcheck", &["--enable=all"], path).await
    }
}
