//! Upload file-name handling.
//!
//! Client-supplied names are untrusted: they may carry directory
//! components, separators, or control characters. Stored names are
//! sanitized and made collision-resistant with a timestamp + id suffix.

use chrono::Utc;
use uuid::Uuid;

/// Strip directory components and unsafe characters from a client name.
///
/// Keeps ASCII alphanumerics, `.`, `_` and `-`; everything else becomes
/// `_`. Leading dots are dropped so a stored name can never be hidden or
/// a `..` reference. An empty result falls back to `"upload"`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Build a collision-resistant stored name: `{stem}_{timestamp}_{id}{ext}`.
///
/// The extension is preserved so kind detection on the stored path matches
/// the uploaded file.
pub fn unique_upload_name(original: &str) -> String {
    let sanitized = sanitize_file_name(original);
    let (stem, ext) = match sanitized.rfind('.') {
        Some(idx) if idx > 0 => sanitized.split_at(idx),
        _ => (sanitized.as_str(), ""),
    };

    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let id = Uuid::new_v4().simple().to_string();

    format!("{stem}_{timestamp}_{}{ext}", &id[..6])
}
