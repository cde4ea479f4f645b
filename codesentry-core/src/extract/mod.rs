//! Document text extraction.
//!
//! Turns a supported document file into one plain-text string for
//! summarization. Plain text is read directly, docx payloads are pulled
//! out of their zip container, and PDFs go through `pdftotext` under the
//! same external-tool discipline as the analyzers.

use std::path::Path;

use tracing::debug;

use crate::{Error, FileKind, Result};

pub mod docx;
pub mod pdf;

/// Extract the full textual content of a document file.
pub async fn extract_text(path: &Path, kind: FileKind) -> Result<String> {
    debug!("Extracting text from {} as {kind}", path.display());

    match kind {
        FileKind::Text => tokio::fs::read_to_string(path).await.map_err(|e| Error::Extraction {
            file: path.display().to_string(),
            message: e.to_string(),
        }),
        FileKind::Docx => docx::extract(path),
        FileKind::Pdf => pdf::extract(path).await,
        other => Err(Error::UnsupportedKind {
            extension: other.to_string(),
        }),
    }
}
