use crate::FunctionTool;
use fieldvault_core::{Result, ToolReply};

/// Fixed reply of the greeting tool
pub const GREETING: &str = "Hello I am MCPTool!";

/// Creates the greeting tool; takes no arguments and has no side effect
pub fn create_hello_tool() -> Result<FunctionTool> {
    FunctionTool::builder()
        .name("hello")
        .description("Hello world.")
        .execute(|ctx, _args| async move {
            tracing::debug!(
                invocation_id = %ctx.invocation_id(),
                tool = %ctx.tool_name(),
                "Greeting requested"
            );

            Ok(ToolReply::message(GREETING))
        })
        .build()
}
