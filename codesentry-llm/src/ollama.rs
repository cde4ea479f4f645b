//! Ollama-compatible summarization backend.
//!
//! Talks to a local model server over its `/api/generate` endpoint.
//! Decoding is deterministic (temperature 0) and every request carries an
//! explicit timeout so a stalled backend cannot stall a request.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LlmError, LlmResult, SummaryBounds, SummaryModel};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.2";

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summarization model served over an Ollama-compatible HTTP API.
pub struct OllamaSummarizer {
    config: OllamaConfig,
    client: Client,
}

impl OllamaSummarizer {
    pub fn new(config: OllamaConfig) -> LlmResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Inference(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn build_prompt(text: &str, bounds: SummaryBounds) -> String {
        format!(
            "Summarize the following text in roughly {} to {} words. \
             Respond with the summary only.\n\n{text}",
            bounds.min_tokens, bounds.max_tokens
        )
    }
}

#[async_trait::async_trait]
impl SummaryModel for OllamaSummarizer {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> LlmResult<String> {
        let url = format!("{}/api/generate", self.config.base_url.trim_end_matches('/'));

        let request_body = GenerateRequest {
            model: &self.config.model,
            prompt: Self::build_prompt(text, bounds),
            stream: false,
            options: GenerateOptions {
                temperature: 0.0,
                num_predict: bounds.max_tokens,
            },
        };

        debug!("Requesting summary from {} ({})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        seconds: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    LlmError::Unavailable
                } else {
                    LlmError::Inference(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Inference(format!("backend returned {status}: {body}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Inference(format!("invalid response: {e}")))?;

        let summary = parsed.response.trim().to_string();
        if summary.is_empty() {
            return Err(LlmError::Inference("empty response from model".to_string()));
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> OllamaConfig {
        OllamaConfig {
            base_url,
            model: "test-model".to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_summarize_against_mock_backend() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "stream": false,
                "options": {"temperature": 0.0, "num_predict": 150}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Two unused imports and one overlong line."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summarizer = OllamaSummarizer::new(test_config(server.uri())).unwrap();
        let summary = summarizer
            .summarize("Line too long\nUnused import os\nUnused import sys", SummaryBounds::LINT)
            .await
            .unwrap();

        assert_eq!(summary, "Two unused imports and one overlong line.");
    }

    #[tokio::test]
    async fn test_backend_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .mount(&server)
            .await;

        let summarizer = OllamaSummarizer::new(test_config(server.uri())).unwrap();
        let result = summarizer.summarize("some findings", SummaryBounds::LINT).await;

        match result {
            Err(LlmError::Inference(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("model not loaded"));
            }
            other => panic!("expected inference error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_model_response_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "  "})))
            .mount(&server)
            .await;

        let summarizer = OllamaSummarizer::new(test_config(server.uri())).unwrap();
        let result = summarizer.summarize("some findings", SummaryBounds::LINT).await;
        assert!(matches!(result, Err(LlmError::Inference(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        // Port 1 is never listening.
        let summarizer =
            OllamaSummarizer::new(test_config("http://127.0.0.1:1".to_string())).unwrap();
        let result = summarizer.summarize("findings", SummaryBounds::LINT).await;
        assert!(matches!(result, Err(LlmError::Unavailable | LlmError::Inference(_))));
    }

    #[test]
    fn test_default_config() {
        let config = OllamaConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 60);
    }
}
