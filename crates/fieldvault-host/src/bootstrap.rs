//! Process-start initialization of the storage backend and tool catalog

use crate::registry::ToolRegistry;
use fieldvault_blob::{BlobStore, FileSystemBlobStore, InMemoryBlobStore};
use fieldvault_core::{Result, StorageBackend, StorageConfig};
use fieldvault_tool::builtin::{
    create_get_snippet_tool, create_hello_tool, create_save_complex_sensor_data_tool,
    create_save_simple_sensor_data_tool, create_save_snippet_tool,
};
use std::sync::Arc;

/// Build the blob store selected by the storage configuration
pub fn build_store(config: &StorageConfig) -> Arc<dyn BlobStore> {
    match config.backend {
        StorageBackend::Filesystem => Arc::new(FileSystemBlobStore::new(&config.root)),
        StorageBackend::Memory => Arc::new(InMemoryBlobStore::new()),
    }
}

/// Build the registry holding the five built-in tools.
///
/// Called once from process start; the returned registry is immutable and
/// shared with whatever dispatches tool invocations.
pub fn build_registry(store: Arc<dyn BlobStore>) -> Result<ToolRegistry> {
    ToolRegistry::builder()
        .register(Arc::new(create_hello_tool()?))
        .register(Arc::new(create_get_snippet_tool(store.clone())?))
        .register(Arc::new(create_save_snippet_tool(store.clone())?))
        .register(Arc::new(create_save_simple_sensor_data_tool(
            store.clone(),
        )?))
        .register(Arc::new(create_save_complex_sensor_data_tool(store)?))
        .build()
}
