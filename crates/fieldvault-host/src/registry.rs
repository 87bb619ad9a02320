//! Immutable tool registry built once at startup

use fieldvault_core::{Error, Result, Tool};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A tool as advertised to the invocation host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRegistration {
    pub name: String,
    pub description: String,
    /// JSON-encoded schema document (ordered property descriptor sequence)
    pub tool_properties: String,
}

/// Registry of invocable tools, indexed by name.
///
/// Built once during initialization and immutable afterwards; the advertised
/// catalog and every cached schema document are read-only for the lifetime
/// of the process, so lookups need no locking.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    registrations: Vec<ToolRegistration>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    /// Looks up a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// The advertised catalog, in registration order
    pub fn registrations(&self) -> &[ToolRegistration] {
        &self.registrations
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builder for ToolRegistry
pub struct ToolRegistryBuilder {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistryBuilder {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Queue a tool for registration; the tool is indexed by its `name()`
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Build the immutable registry, encoding each tool's registration.
    ///
    /// Duplicate tool names are a configuration error.
    pub fn build(self) -> Result<ToolRegistry> {
        let mut tools = HashMap::new();
        let mut registrations = Vec::with_capacity(self.tools.len());

        for tool in self.tools {
            let name = tool.name().to_string();
            if tools.contains_key(&name) {
                return Err(Error::Config(format!("duplicate tool name: {name}")));
            }

            let tool_properties = serde_json::to_string(&tool.schema())?;
            registrations.push(ToolRegistration {
                name: name.clone(),
                description: tool.description().to_string(),
                tool_properties,
            });
            tools.insert(name, tool);
        }

        Ok(ToolRegistry {
            tools,
            registrations,
        })
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
