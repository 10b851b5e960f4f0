//! File-backed watermark storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::storage::WatermarkStore;

/// Watermark stored as a single integer in a text file.
///
/// An absent file means no thread has been announced yet.
pub struct FileWatermark {
    path: PathBuf,
}

impl FileWatermark {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WatermarkStore for FileWatermark {
    async fn load(&self) -> Result<Option<u64>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let id = content.trim().parse::<u64>().map_err(|e| {
            AppError::watermark(format!(
                "unreadable watermark in {:?}: {e}",
                self.path
            ))
        })?;
        Ok(Some(id))
    }

    async fn store(&self, id: u64) -> Result<()> {
        tokio::fs::write(&self.path, id.to_string())
            .await
            .map_err(|e| {
                AppError::watermark(format!("cannot write {:?}: {e}", self.path))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWatermark::new(dir.path().join("last.id"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWatermark::new(dir.path().join("last.id"));
        store.store(1234).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(1234));
    }

    #[tokio::test]
    async fn test_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWatermark::new(dir.path().join("last.id"));
        store.store(1).await.unwrap();
        store.store(2).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last.id");
        tokio::fs::write(&path, "not a number").await.unwrap();
        let store = FileWatermark::new(&path);
        assert!(matches!(
            store.load().await,
            Err(AppError::Watermark(_))
        ));
    }

    #[tokio::test]
    async fn test_trailing_whitespace_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last.id");
        tokio::fs::write(&path, "77\n").await.unwrap();
        let store = FileWatermark::new(&path);
        assert_eq!(store.load().await.unwrap(), Some(77));
    }
}
