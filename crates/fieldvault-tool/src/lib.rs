//! Tool system for Fieldvault
//!
//! This crate provides the tool layer, including:
//! - Property descriptors and declarative schema documents
//! - Function tools with schemas built once at construction
//! - Built-in tools (greeting, snippets, sensor data)
//! - Tool context management

pub mod builtin;
pub mod context;
pub mod definitions;
pub mod descriptor;
pub mod function_tool;
pub mod schema;

// Re-exports
pub use context::DefaultToolContext;
pub use descriptor::{PropertyDescriptor, PropertyKind, PropertyType};
pub use function_tool::FunctionTool;
pub use schema::SchemaBuilder;

// Re-export core types
pub use fieldvault_core::{Result, Tool, ToolContext, ToolReply};
