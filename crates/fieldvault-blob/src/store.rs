//! Blob store trait definition

use crate::Result;
use async_trait::async_trait;

/// The blob storage trait.
///
/// Each tool invocation performs at most one storage operation on a single
/// named blob: a read or a full-content write. There is no listing, no
/// deletion, and no multi-object transaction; writes are presumed atomic by
/// the backend.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write a blob, replacing any existing content at the path.
    async fn write(&self, path: &str, content: &str) -> Result<()>;

    /// Read the full content of a blob.
    ///
    /// Reading a missing blob is an error.
    async fn read(&self, path: &str) -> Result<String>;
}
