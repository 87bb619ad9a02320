//! In-memory blob store implementation

use crate::store::BlobStore;
use crate::{BlobError, Result, validate_path};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory blob store.
///
/// This is primarily for testing and demonstration purposes.
/// Blobs are stored in memory and are not persisted across restarts.
#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Create a new in-memory blob store
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Whether a blob exists at the given path
    pub fn contains(&self, path: &str) -> bool {
        self.blobs.read().unwrap().contains_key(path)
    }

    /// Number of stored blobs
    pub fn len(&self) -> usize {
        self.blobs.read().unwrap().len()
    }

    /// Whether the store holds no blobs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn write(&self, path: &str, content: &str) -> Result<()> {
        validate_path(path)?;

        let mut blobs = self.blobs.write().unwrap();
        blobs.insert(path.to_string(), content.to_string());

        Ok(())
    }

    async fn read(&self, path: &str) -> Result<String> {
        validate_path(path)?;

        let blobs = self.blobs.read().unwrap();
        blobs
            .get(path)
            .cloned()
            .ok_or_else(|| BlobError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_and_read() {
        let store = InMemoryBlobStore::new();

        store.write("snippets/a.json", "content").await.unwrap();

        assert!(store.contains("snippets/a.json"));
        assert_eq!(store.read("snippets/a.json").await.unwrap(), "content");
    }

    #[tokio::test]
    async fn test_read_missing_blob() {
        let store = InMemoryBlobStore::new();

        let result = store.read("snippets/missing.json").await;
        assert!(matches!(result, Err(BlobError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryBlobStore::new();
        let view = store.clone();

        store.write("snippets/a.json", "shared").await.unwrap();

        assert_eq!(view.read("snippets/a.json").await.unwrap(), "shared");
        assert_eq!(view.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryBlobStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("snippets/a.json"));
    }
}
