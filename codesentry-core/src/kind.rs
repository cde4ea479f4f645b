//! File kind detection from extensions.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Supported input kinds, inferred from the file extension.
///
/// Code kinds go through the analyzer registry; document kinds go through
/// text extraction and straight to summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Python,
    JavaScript,
    Cpp,
    Html,
    Java,
    Text,
    Docx,
    Pdf,
}

impl FileKind {
    /// Infer the kind from a path's extension. `None` for anything
    /// the pipeline does not handle.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "py" => Some(Self::Python),
            "js" | "jsx" | "mjs" => Some(Self::JavaScript),
            "cpp" | "cxx" | "cc" | "c" | "h" | "hpp" => Some(Self::Cpp),
            "html" | "htm" => Some(Self::Html),
            "java" => Some(Self::Java),
            "txt" => Some(Self::Text),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Kinds handled by a static analyzer.
    pub fn is_code(self) -> bool {
        matches!(
            self,
            Self::Python | Self::JavaScript | Self::Cpp | Self::Html | Self::Java
        )
    }

    /// Kinds handled by document extraction + summarization.
    pub fn is_document(self) -> bool {
        !self.is_code()
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Cpp => "cpp",
            Self::Html => "html",
            Self::Java => "java",
            Self::Text => "text",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_kind_detection() {
        assert_eq!(FileKind::from_path(&PathBuf::from("app.py")), Some(FileKind::Python));
        assert_eq!(FileKind::from_path(&PathBuf::from("ui.jsx")), Some(FileKind::JavaScript));
        assert_eq!(FileKind::from_path(&PathBuf::from("main.CPP")), Some(FileKind::Cpp));
        assert_eq!(FileKind::from_path(&PathBuf::from("index.htm")), Some(FileKind::Html));
        assert_eq!(FileKind::from_path(&PathBuf::from("Main.java")), Some(FileKind::Java));
        assert_eq!(FileKind::from_path(&PathBuf::from("notes.txt")), Some(FileKind::Text));
        assert_eq!(FileKind::from_path(&PathBuf::from("thesis.docx")), Some(FileKind::Docx));
        assert_eq!(FileKind::from_path(&PathBuf::from("paper.pdf")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(&PathBuf::from("archive.tar.gz")), None);
        assert_eq!(FileKind::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_code_document_split() {
        assert!(FileKind::Python.is_code());
        assert!(FileKind::Java.is_code());
        assert!(!FileKind::Pdf.is_code());
        assert!(FileKind::Text.is_document());
        assert!(FileKind::Docx.is_document());
        assert!(!FileKind::Html.is_document());
    }
}
