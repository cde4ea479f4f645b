//! docx text extraction.
//!
//! A docx file is a zip container; the body text lives in
//! `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.
//! Paragraph ends become newlines, everything else is markup to drop.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</w:p>").unwrap())
}

fn text_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap())
}

/// Extract the paragraph text of a docx file.
pub fn extract(path: &Path) -> Result<String> {
    let extraction_error = |message: String| Error::Extraction {
        file: path.display().to_string(),
        message,
    };

    let file = File::open(path).map_err(|e| extraction_error(e.to_string()))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| extraction_error(format!("not a docx container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| extraction_error(format!("missing document body: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| extraction_error(e.to_string()))?;

    Ok(document_xml_to_text(&xml))
}

/// Flatten document XML into paragraph-per-line plain text.
fn document_xml_to_text(xml: &str) -> String {
    let with_breaks = paragraph_re().replace_all(xml, "\n");

    let paragraphs: Vec<String> = with_breaks
        .lines()
        .map(|line| {
            text_run_re()
                .captures_iter(line)
                .map(|cap| cap[1].to_string())
                .collect::<Vec<_>>()
                .concat()
        })
        .map(|text| decode_entities(&text))
        .collect();

    paragraphs.join("\n").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
