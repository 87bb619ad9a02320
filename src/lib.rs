//! # Fieldvault
//!
//! A small tool host: remotely invocable tools whose JSON payloads are
//! persisted to blob paths derived from the request arguments. This umbrella
//! crate re-exports the pieces most callers wire together at startup.

pub use fieldvault_blob::{BlobStore, BlobTemplate, FileSystemBlobStore, InMemoryBlobStore};
pub use fieldvault_core::{Error, Result, Tool, ToolContext, ToolReply, VaultConfig};
pub use fieldvault_host::{
    Dispatcher, ToolRegistration, ToolRegistry, TriggerPayload, build_registry, build_store,
    create_router, serve,
};
pub use fieldvault_telemetry::init_telemetry;
pub use fieldvault_tool::{
    FunctionTool, PropertyDescriptor, PropertyKind, PropertyType, SchemaBuilder,
};
