//! External Analyzer Integration
//!
//! One static-analysis tool per supported file kind, dispatched through a
//! registry. Dispatch never raises past its boundary: unsupported kinds,
//! timeouts, and execution failures all come back as descriptive strings
//! so the caller always has something to report.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{Error, FileKind, Result};

pub mod checkstyle;
pub mod cppcheck;
pub mod eslint;
pub mod pylint;
pub mod tidy;

/// Sentinel returned when no analyzer is registered for a file's kind.
pub const UNSUPPORTED_MESSAGE: &str = "Unsupported file type for static analysis";

/// One external static-analysis tool.
///
/// Implementations configure the tool's argv; invocation, capture, and
/// timeout discipline are the registry's job.
#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    /// Executable name the tool is invoked as.
    fn tool_name(&self) -> &'static str;

    /// Whether the tool can be found on PATH.
    fn is_available(&self) -> bool {
        which::which(self.tool_name()).is_ok()
    }

    /// Run the tool against a single file and return its text output.
    async fn analyze(&self, path: &Path) -> Result<String>;
}

/// Run one tool invocation against a file and capture its text output.
///
/// Lint tools exit non-zero when they find issues, so the exit status is
/// not treated as failure. stderr stands in when stdout is empty: cppcheck
/// reports findings there.
pub(crate) async fn run_tool(tool: &'static str, args: &[&str], path: &Path) -> Result<String> {
    debug!("Running {} on {}", tool, path.display());

    let output = Command::new(tool)
        .args(args)
        .arg(path)
        .output()
        .await
        .map_err(|e| Error::ToolExecution {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Ok(stderr.into_owned());
        }
    }

    Ok(stdout.into_owned())
}

/// Availability of one registered tool, for health reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolStatus {
    pub kind: FileKind,
    pub tool: String,
    pub available: bool,
}

/// Lookup table mapping file kinds to their analyzers.
///
/// New kinds register without touching dispatch logic.
pub struct AnalyzerRegistry {
    analyzers: HashMap<FileKind, Box<dyn Analyzer>>,
    timeout: Duration,
}

impl AnalyzerRegistry {
    /// Create an empty registry with the default invocation timeout.
    pub fn new() -> Self {
        Self {
            analyzers: HashMap::new(),
            timeout: Duration::from_secs(crate::constants::ANALYZER_TIMEOUT_SECS),
        }
    }

    /// Create a registry with the standard tool per supported kind.
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();
        registry.register(FileKind::Python, Box::new(pylint::PylintAnalyzer));
        registry.register(FileKind::JavaScript, Box::new(eslint::EslintAnalyzer));
        registry.register(FileKind::Cpp, Box::new(cppcheck::CppcheckAnalyzer));
        registry.register(FileKind::Html, Box::new(tidy::TidyAnalyzer));
        registry.register(FileKind::Java, Box::new(checkstyle::CheckstyleAnalyzer));
        registry
    }

    /// Set the per-invocation wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Register an analyzer for a kind, replacing any previous one.
    pub fn register(&mut self, kind: FileKind, analyzer: Box<dyn Analyzer>) {
        self.analyzers.insert(kind, analyzer);
    }

    /// Whether a kind has a registered analyzer.
    pub fn supports(&self, kind: FileKind) -> bool {
        self.analyzers.contains_key(&kind)
    }

    /// Availability of every registered tool.
    pub fn tool_status(&self) -> Vec<ToolStatus> {
        let mut status: Vec<ToolStatus> = self
            .analyzers
            .iter()
            .map(|(kind, analyzer)| ToolStatus {
                kind: *kind,
                tool: analyzer.tool_name().to_string(),
                available: analyzer.is_available(),
            })
            .collect();
        status.sort_by(|a, b| a.tool.cmp(&b.tool));
        status
    }

    /// Run the analyzer for `kind` against `path`.
    ///
    /// Always returns text: tool output on success, otherwise the
    /// unsupported/timeout/failure sentinel for the condition hit.
    /// Spawns at most one child process, no retries.
    pub async fn dispatch(&self, path: &Path, kind: FileKind) -> String {
        let Some(analyzer) = self.analyzers.get(&kind) else {
            debug!("No analyzer registered for kind {kind}");
            return UNSUPPORTED_MESSAGE.to_string();
        };

        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        match timeout(self.timeout, analyzer.analyze(path)).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!("{} failed on {}: {e}", analyzer.tool_name(), path.display());
                format!("Error during static analysis: {e}")
            }
            Err(_) => {
                warn!(
                    "{} exceeded {}s budget on {}",
                    analyzer.tool_name(),
                    self.timeout.as_secs(),
                    path.display()
                );
                format!("{file_name} analysis timed out")
            }
        }
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_default_tools()
    }
}
