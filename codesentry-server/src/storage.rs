//! Upload persistence.

use std::path::{Path, PathBuf};

use codesentry_utils::unique_upload_name;
use tracing::debug;

/// Stores uploaded files under one directory with collision-resistant
/// names derived from the client-supplied file name.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create the store, creating its directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one upload and return its stored path.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let stored_name = unique_upload_name(original_name);
        let path = self.dir.join(stored_name);

        tokio::fs::write(&path, data).await?;
        debug!("Stored {} byte upload at {}", data.len(), path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_keeps_extension_and_content() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let path = store.save("script.py", b"import os\n").await.unwrap();

        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "py");
        assert_eq!(std::fs::read(&path).unwrap(), b"import os\n");
        assert!(path.starts_with(dir.path()));
    }

    #[tokio::test]
    async fn test_save_sanitizes_traversal_attempts() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let path = store.save("../../etc/passwd", b"nope").await.unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("passwd"));
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/upload");
        let store = UploadStore::new(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
