//! Host surface for Fieldvault
//!
//! This crate provides what the managed trigger host supplies in production:
//! - an immutable tool registry built once at process start
//! - invocation payload parsing and dispatch by tool name
//! - a REST surface advertising registrations and accepting invocations

pub mod bootstrap;
pub mod dispatch;
pub mod registry;
pub mod rest;

// Re-exports
pub use bootstrap::{build_registry, build_store};
pub use dispatch::{Dispatcher, TriggerPayload};
pub use registry::{ToolRegistration, ToolRegistry, ToolRegistryBuilder};
pub use rest::{create_router, serve};
