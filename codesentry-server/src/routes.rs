//! HTTP routes and handlers.

use std::sync::Arc;

use axum::extract::multipart::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use codesentry_analysis::AnalysisPipeline;
use codesentry_core::Error;

use crate::storage::UploadStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<AnalysisPipeline>,
    store: Arc<UploadStore>,
}

impl AppState {
    pub fn new(pipeline: AnalysisPipeline, store: UploadStore) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            store: Arc::new(store),
        }
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/upload", post(upload))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint - basic service information
async fn index() -> Json<Value> {
    Json(json!({
        "service": "codesentry",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Static analysis reports with model-backed summaries",
        "endpoints": {
            "health": "/health",
            "upload": "/upload"
        }
    }))
}

/// Health check: analyzer and summarizer availability
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "analyzers": state.pipeline.tool_status(),
        "summarizer": {
            "configured": state.pipeline.summarizer_available()
        }
    }))
}

/// File upload and analysis.
///
/// Expects a multipart form with a `file` field; responds with the
/// rendered report, or a JSON error message mirroring the failure.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut uploaded: Option<(String, axum::body::Bytes)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let file_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => {
                        uploaded = Some((file_name, data));
                        break;
                    }
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read upload: {e}"),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid multipart request: {e}"),
                );
            }
        }
    }

    let Some((file_name, data)) = uploaded else {
        return error_response(StatusCode::BAD_REQUEST, "No file part in the request.".to_string());
    };

    if file_name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No file selected.".to_string());
    }

    let stored = match state.store.save(&file_name, &data).await {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to store upload {file_name}: {e}");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store upload: {e}"),
            );
        }
    };

    info!("Processing upload {} ({} bytes)", stored.display(), data.len());

    match state.pipeline.run(&stored).await {
        Ok(report) => (StatusCode::OK, Json(json!({ "result": report.render() }))),
        Err(Error::UnsupportedKind { .. }) => error_response(
            StatusCode::BAD_REQUEST,
            "Unsupported file type for analysis.".to_string(),
        ),
        Err(e) => {
            error!("Analysis failed for {}: {e}", stored.display());
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Analysis failed: {e}"))
        }
    }
}

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}
