//! PDF text extraction via `pdftotext`.

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::{constants, Error, Result};

/// Extract the text of a PDF with `pdftotext <file> -`.
///
/// Runs under the same wall-clock budget as the analyzers; a hung
/// conversion surfaces as an extraction error, not a stalled request.
pub async fn extract(path: &Path) -> Result<String> {
    let extraction_error = |message: String| Error::Extraction {
        file: path.display().to_string(),
        message,
    };

    debug!("Running pdftotext on {}", path.display());

    let budget = Duration::from_secs(constants::ANALYZER_TIMEOUT_SECS);
    let invocation = Command::new("pdftotext").arg(path).arg("-").output();

    let output = timeout(budget, invocation)
        .await
        .map_err(|_| extraction_error(format!("pdftotext timed out after {} seconds", budget.as_secs())))?
        .map_err(|e| extraction_error(format!("pdftotext failed to start: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(extraction_error(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
