//! Core traits and types for Fieldvault
//!
//! This crate provides the foundational abstractions shared by the tool,
//! storage, and host crates.

pub mod config;
pub mod context;
pub mod error;
pub mod traits;

// Re-exports
pub use config::{ObservabilityConfig, ServerConfig, StorageBackend, StorageConfig, VaultConfig};
pub use context::ToolContext;
pub use error::{Error, Result};
pub use traits::{Tool, ToolReply};
