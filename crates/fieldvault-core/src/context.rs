/// Tool context provided during tool execution
///
/// Carries the per-invocation identity the host assigned to this trigger.
/// Argument values travel separately, as the payload passed to
/// [`crate::Tool::execute`].
pub trait ToolContext: Send + Sync {
    /// Returns a unique ID for this invocation
    fn invocation_id(&self) -> &str;

    /// Returns the name the tool was invoked under
    fn tool_name(&self) -> &str;
}
