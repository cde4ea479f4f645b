//! CodeSentry server entry point.
//!
//! Wires the analyzer registry, the summarization backend, and the
//! upload store into one `AnalysisPipeline`, then serves it over HTTP.

mod routes;
mod storage;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use codesentry_analysis::AnalysisPipeline;
use codesentry_core::{AnalyzerRegistry, SentryConfig};
use codesentry_llm::{OllamaConfig, OllamaSummarizer, SummarizerAdapter};
use codesentry_utils::logging::init_default_logging;

use crate::routes::AppState;
use crate::storage::UploadStore;

#[derive(Parser)]
#[command(name = "codesentry")]
#[command(about = "Static analysis reports with model-backed summaries")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Directory uploaded files are stored in
    #[arg(long, default_value = "upload")]
    upload_dir: PathBuf,

    /// Base URL of the summarization backend
    #[arg(long, default_value = "http://localhost:11434", env = "CODESENTRY_MODEL_URL")]
    model_url: String,

    /// Model served by the summarization backend
    #[arg(long, default_value = "llama3.2", env = "CODESENTRY_MODEL")]
    model: String,

    /// Summarization request timeout in seconds
    #[arg(long, default_value_t = 60)]
    model_timeout: u64,

    /// Run without a summarization backend (reports carry no summary)
    #[arg(long)]
    no_model: bool,

    /// Analyzer invocation timeout in seconds
    #[arg(long, default_value_t = 30)]
    analyzer_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_default_logging().context("failed to initialize logging")?;

    let config = SentryConfig {
        analyzer_timeout_secs: cli.analyzer_timeout,
        summary_timeout_secs: cli.model_timeout,
        upload_dir: cli.upload_dir,
        ..SentryConfig::default()
    };

    let store = UploadStore::new(&config.upload_dir)
        .with_context(|| format!("failed to prepare upload dir {}", config.upload_dir.display()))?;

    let registry = AnalyzerRegistry::with_default_tools()
        .with_timeout(Duration::from_secs(config.analyzer_timeout_secs));

    for status in registry.tool_status() {
        if status.available {
            info!("{} is available ({})", status.tool, status.kind);
        } else {
            info!("{} is not installed; {} uploads will report it missing", status.tool, status.kind);
        }
    }

    let summarizer = if cli.no_model {
        info!("Running without a summarization backend");
        SummarizerAdapter::disabled()
    } else {
        let model = OllamaSummarizer::new(OllamaConfig {
            base_url: cli.model_url.clone(),
            model: cli.model.clone(),
            timeout_secs: cli.model_timeout,
        })
        .context("failed to construct summarization client")?;
        info!("Summarization backend: {} at {}", cli.model, cli.model_url);
        SummarizerAdapter::new(Some(Arc::new(model)))
    };

    let pipeline = AnalysisPipeline::new(registry, summarizer, config);
    let app = routes::create_app(AppState::new(pipeline, store));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?;

    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
