//! File system blob store implementation

use crate::store::BlobStore;
use crate::{BlobError, Result, validate_path};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// File system blob store.
///
/// Stores blobs as files under a root directory, one file per blob path
/// segment chain: `root/simple-sensor-data/2026-01-01-s1.json`.
pub struct FileSystemBlobStore {
    root: PathBuf,
}

impl FileSystemBlobStore {
    /// Create a new file system blob store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a validated blob path onto the file system.
    ///
    /// Characters that are path separators or reserved on common file
    /// systems are replaced within each segment.
    fn file_path(&self, path: &str) -> PathBuf {
        let mut file_path = self.root.clone();
        for segment in path.split('/') {
            file_path.push(segment.replace(['\\', ':'], "_"));
        }
        file_path
    }
}

#[async_trait]
impl BlobStore for FileSystemBlobStore {
    async fn write(&self, path: &str, content: &str) -> Result<()> {
        validate_path(path)?;

        let file_path = self.file_path(path);

        // Ensure the containing directory exists
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&file_path, content).await?;

        Ok(())
    }

    async fn read(&self, path: &str) -> Result<String> {
        validate_path(path)?;

        let file_path = self.file_path(path);

        if !file_path.exists() {
            return Err(BlobError::NotFound(path.to_string()));
        }

        let content = fs::read_to_string(&file_path).await?;

        Ok(content)
    }
}
