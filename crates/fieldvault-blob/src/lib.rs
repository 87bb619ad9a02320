//! # Fieldvault Blob Storage
//!
//! Blob storage for the JSON documents Fieldvault tools persist. A blob is
//! addressed by a slash-separated path computed from a path template plus
//! request argument values (e.g. `snippets/{snippetname}.json`).
//!
//! ## Features
//!
//! - **Multiple Storage Backends**: file system and in-memory
//! - **Path Templates**: `{placeholder}` interpolation from argument maps
//! - **Async/Await**: fully asynchronous API using tokio

use thiserror::Error;

mod filesystem;
mod memory;
mod store;
mod template;

pub use filesystem::FileSystemBlobStore;
pub use memory::InMemoryBlobStore;
pub use store::BlobStore;
pub use template::BlobTemplate;

/// Errors that can occur during blob operations
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid blob path: {0}")]
    InvalidPath(String),

    #[error("Unresolved path template placeholder: {0}")]
    UnresolvedPlaceholder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for blob operations
pub type Result<T> = std::result::Result<T, BlobError>;

/// Validate a blob path: non-empty, slash-separated segments, no traversal
pub(crate) fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BlobError::InvalidPath("empty path".to_string()));
    }

    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(BlobError::InvalidPath(path.to_string()));
        }
    }

    Ok(())
}
