//! Trigger payload parsing and tool dispatch

use crate::registry::ToolRegistry;
use fieldvault_core::{Error, Result};
use fieldvault_tool::DefaultToolContext;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// The invocation payload delivered by the host.
///
/// Handlers read required fields from `arguments` by exact name; an absent
/// mapping is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerPayload {
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Routes host invocations to registered tools
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatch a raw invocation payload (JSON text) to a tool by name
    pub async fn dispatch_raw(&self, tool_name: &str, payload: &str) -> Result<String> {
        let payload: TriggerPayload = serde_json::from_str(payload)?;
        self.dispatch(tool_name, payload).await
    }

    /// Dispatch a parsed payload to a tool, returning the reply string.
    ///
    /// Validation failures inside the tool come back as ordinary replies;
    /// only unknown tools and storage/host failures surface as errors.
    pub async fn dispatch(&self, tool_name: &str, payload: TriggerPayload) -> Result<String> {
        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| Error::ToolNotFound(tool_name.to_string()))?;

        let invocation_id = Uuid::new_v4().to_string();
        let ctx = Arc::new(DefaultToolContext::new(
            tool_name.to_string(),
            invocation_id.clone(),
        ));

        tracing::debug!(
            invocation_id = %invocation_id,
            tool = %tool_name,
            "Dispatching tool invocation"
        );

        let reply = tool
            .execute(ctx, Value::Object(payload.arguments))
            .await
            .map_err(|e| Error::ToolFailed {
                tool: tool_name.to_string(),
                source: anyhow::Error::new(e),
            })?;

        Ok(reply.message)
    }
}
