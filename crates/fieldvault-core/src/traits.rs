use super::{Result, ToolContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Tool trait - abstraction for remotely invocable tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name the tool registers with the invocation host
    fn name(&self) -> &str;

    /// Returns a description of what the tool does
    fn description(&self) -> &str;

    /// Returns the declarative schema document for the tool's arguments
    fn schema(&self) -> serde_json::Value;

    /// Executes the tool with the argument mapping from the trigger payload
    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        args: serde_json::Value,
    ) -> Result<ToolReply>;
}

/// Tool execution reply
///
/// The host treats every reply as tool output: success confirmations and
/// validation failures share this one string channel. Storage and host-layer
/// failures travel as [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub message: String,
}

impl ToolReply {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}
