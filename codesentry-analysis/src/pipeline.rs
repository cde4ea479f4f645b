//! Request orchestration.
//!
//! One `AnalysisPipeline` serves the whole process: analyzer registry,
//! summarizer capability, and configuration are injected at construction
//! and never mutated afterwards, so concurrent requests share it freely.
//! Each request runs its stages sequentially; every stage failure
//! degrades to a descriptive string inside the report, and only a
//! missing input file or an unrecognized extension surface as errors.

use std::path::Path;

use tracing::info;

use codesentry_core::extract::extract_text;
use codesentry_core::{AnalyzerRegistry, Error, FileKind, Result, SentryConfig, ToolStatus};
use codesentry_llm::SummarizerAdapter;
use codesentry_utils::wrap_text;

use crate::categorize::categorize;
use crate::normalize::normalize;
use crate::report::Report;

pub struct AnalysisPipeline {
    registry: AnalyzerRegistry,
    summarizer: SummarizerAdapter,
    config: SentryConfig,
}

impl AnalysisPipeline {
    pub fn new(registry: AnalyzerRegistry, summarizer: SummarizerAdapter, config: SentryConfig) -> Self {
        Self {
            registry,
            summarizer,
            config,
        }
    }

    /// Availability of the registered analyzers, for health reporting.
    pub fn tool_status(&self) -> Vec<ToolStatus> {
        self.registry.tool_status()
    }

    /// Whether a summarization backend is configured.
    pub fn summarizer_available(&self) -> bool {
        self.summarizer.is_available()
    }

    /// Analyze one uploaded file and assemble its report.
    ///
    /// Errors only when the file cannot be read at all or its extension
    /// maps to no known kind; tool and model failures come back inside
    /// the report.
    pub async fn run(&self, path: &Path) -> Result<Report> {
        if !path.is_file() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("uploaded file not found: {}", path.display()),
            )));
        }

        let Some(kind) = FileKind::from_path(path) else {
            let extension = path
                .extension()
                .map_or_else(String::new, |e| e.to_string_lossy().into_owned());
            return Err(Error::UnsupportedKind { extension });
        };

        info!("Analyzing {} as {kind}", path.display());

        if kind.is_code() {
            Ok(self.run_code(path, kind).await)
        } else {
            Ok(self.run_document(path, kind).await)
        }
    }

    /// path → raw tool text → (categorize, normalize → summarize) → report.
    async fn run_code(&self, path: &Path, kind: FileKind) -> Report {
        let raw = self.registry.dispatch(path, kind).await;

        let categories = categorize(&raw);
        let normalized = normalize(&raw);
        let summary = self.summarizer.summarize_lint(&normalized.join("\n")).await;

        Report::code(summary, categories, raw)
    }

    /// path → extracted text → wrap → summarize → wrap → report.
    async fn run_document(&self, path: &Path, kind: FileKind) -> Report {
        let content = match extract_text(path, kind).await {
            Ok(content) => content,
            Err(e) => {
                return Report::document(format!("Error during text file analysis: {e}"));
            }
        };

        let wrapped = wrap_text(&content, self.config.wrap_width);
        let summary = self.summarizer.summarize_document(&wrapped).await;

        Report::document(wrap_text(&summary, self.config.wrap_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    use codesentry_core::Analyzer;
    use codesentry_llm::{
        LlmResult, SummaryBounds, SummaryModel, DOCUMENT_FALLBACK_MESSAGE, LINT_FALLBACK_MESSAGE,
        NO_FINDINGS_MESSAGE,
    };

    struct FixedOutputAnalyzer(&'static str);

    #[async_trait::async_trait]
    impl Analyzer for FixedOutputAnalyzer {
        fn tool_name(&self) -> &'static str {
            "fixed-tool"
        }

        fn is_available(&self) -> bool {
            true
        }

        async fn analyze(&self, _path: &Path) -> codesentry_core::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct EchoInputModel;

    #[async_trait::async_trait]
    impl SummaryModel for EchoInputModel {
        fn model_name(&self) -> &str {
            "echo-input"
        }

        async fn summarize(&self, text: &str, _bounds: SummaryBounds) -> LlmResult<String> {
            Ok(format!("summary of [{text}]"))
        }
    }

    const PYLINT_OUTPUT: &str = "file.py:10:5: C0301: Line too long (85/79)\n\
                                 file.py:12:1: W0611: Unused import";

    fn pipeline_with(tool_output: &'static str, summarizer: SummarizerAdapter) -> AnalysisPipeline {
        let mut registry = AnalyzerRegistry::new();
        registry.register(FileKind::Python, Box::new(FixedOutputAnalyzer(tool_output)));
        AnalysisPipeline::new(registry, summarizer, SentryConfig::default())
    }

    #[tokio::test]
    async fn test_end_to_end_code_analysis() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.py");
        fs::write(&file, "import os\n").unwrap();

        let summarizer = SummarizerAdapter::new(Some(Arc::new(EchoInputModel)));
        let pipeline = pipeline_with(PYLINT_OUTPUT, summarizer);

        let report = pipeline.run(&file).await.unwrap();

        // The model saw the cleaned descriptions, codes and parens gone.
        assert_eq!(report.summary, "summary of [Line too long\nUnused import]");

        let categories = report.categories.as_ref().unwrap();
        assert_eq!(categories.readability.len(), 1);
        assert!(categories.readability[0].contains("Line too long"));
        assert_eq!(categories.code_quality.len(), 1);
        assert!(categories.code_quality[0].contains("Unused import"));
        assert!(categories.errors.is_empty());

        // Raw section is verbatim.
        let rendered = report.render();
        assert!(rendered.contains("file.py:10:5: C0301: Line too long (85/79)"));
        assert!(rendered.contains("file.py:12:1: W0611: Unused import"));
    }

    #[tokio::test]
    async fn test_code_analysis_without_backend() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.py");
        fs::write(&file, "import os\n").unwrap();

        let pipeline = pipeline_with(PYLINT_OUTPUT, SummarizerAdapter::disabled());
        let report = pipeline.run(&file).await.unwrap();
        assert_eq!(report.summary, LINT_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_clean_tool_output_yields_no_findings_message() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.py");
        fs::write(&file, "x = 1\n").unwrap();

        let summarizer = SummarizerAdapter::new(Some(Arc::new(EchoInputModel)));
        let pipeline = pipeline_with("", summarizer);

        let report = pipeline.run(&file).await.unwrap();
        assert_eq!(report.summary, NO_FINDINGS_MESSAGE);
    }

    #[tokio::test]
    async fn test_document_flow_without_backend() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "some document content\n").unwrap();

        let pipeline = pipeline_with("", SummarizerAdapter::disabled());
        let report = pipeline.run(&file).await.unwrap();

        assert_eq!(report.summary, DOCUMENT_FALLBACK_MESSAGE);
        assert!(report.render().starts_with("Text File Analysis Summary:"));
    }

    #[tokio::test]
    async fn test_document_summary_is_wrapped() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "word ".repeat(200)).unwrap();

        let summarizer = SummarizerAdapter::new(Some(Arc::new(EchoInputModel)));
        let pipeline = pipeline_with("", summarizer);

        let report = pipeline.run(&file).await.unwrap();
        for line in report.summary.lines() {
            assert!(line.len() <= SentryConfig::default().wrap_width);
        }
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("archive.tar");
        fs::write(&file, "data").unwrap();

        let pipeline = pipeline_with("", SummarizerAdapter::disabled());
        let result = pipeline.run(&file).await;
        assert!(matches!(result, Err(Error::UnsupportedKind { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let pipeline = pipeline_with("", SummarizerAdapter::disabled());
        let result = pipeline.run(Path::new("/nonexistent/file.py")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
