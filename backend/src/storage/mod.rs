//! Image storage for business uploads
//!
//! Stores uploaded bytes under the configured public upload directory and
//! returns the relative path the business record points at. Filenames are
//! timestamp-plus-uuid so concurrent uploads never collide.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Disk-backed image store
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create upload dir {}", self.root.display()))
    }

    /// Check that the upload directory exists and is a directory
    ///
    /// Used by the readiness probe; [`ensure_dir`](Self::ensure_dir) is the
    /// startup-time counterpart that creates it.
    pub async fn verify_dir(&self) -> Result<()> {
        let meta = tokio::fs::metadata(&self.root)
            .await
            .with_context(|| format!("upload dir {} is missing", self.root.display()))?;
        anyhow::ensure!(
            meta.is_dir(),
            "upload path {} is not a directory",
            self.root.display()
        );
        Ok(())
    }

    /// Persist uploaded bytes, returning the stored relative path
    ///
    /// Only the extension of the client-supplied filename is kept; the rest
    /// of the name is generated, so path traversal in `original_name` is
    /// inert.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let filename = Self::generate_name(original_name);
        let path = self.root.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write upload {}", path.display()))?;

        Ok(format!("uploads/{}", filename))
    }

    fn generate_name(original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();

        format!("{}-{}{}", Utc::now().timestamp_millis(), Uuid::new_v4(), ext)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> ImageStore {
        let dir = std::env::temp_dir().join(format!("marketplace-test-{}", Uuid::new_v4()));
        ImageStore::new(dir)
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_relative_path() {
        let store = temp_store();
        store.ensure_dir().await.unwrap();

        let path = store.save("logo.png", b"image-bytes").await.unwrap();
        assert!(path.starts_with("uploads/"));
        assert!(path.ends_with(".png"));

        let filename = path.strip_prefix("uploads/").unwrap();
        let bytes = tokio::fs::read(store.root().join(filename)).await.unwrap();
        assert_eq!(bytes, b"image-bytes");
    }

    #[tokio::test]
    async fn test_saved_names_do_not_collide() {
        let store = temp_store();
        store.ensure_dir().await.unwrap();

        let a = store.save("logo.png", b"a").await.unwrap();
        let b = store.save("logo.png", b"b").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_dir_requires_the_directory() {
        let store = temp_store();
        assert!(store.verify_dir().await.is_err());

        store.ensure_dir().await.unwrap();
        assert!(store.verify_dir().await.is_ok());
    }

    #[test]
    fn test_generated_name_strips_hostile_input() {
        let name = ImageStore::generate_name("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));

        // An extension with path characters is dropped entirely
        let name = ImageStore::generate_name("x.p/ng");
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_generated_name_keeps_simple_extension() {
        let name = ImageStore::generate_name("photo.JPEG");
        assert!(name.ends_with(".jpeg"));
    }
}
