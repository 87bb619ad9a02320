use crate::descriptor::PropertyDescriptor;
use crate::schema::SchemaBuilder;
use async_trait::async_trait;
use fieldvault_core::{Result, Tool, ToolContext, ToolReply};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for tool execution function
pub type ToolFn = Box<
    dyn Fn(Arc<dyn ToolContext>, Value) -> Pin<Box<dyn Future<Output = Result<ToolReply>> + Send>>
        + Send
        + Sync,
>;

/// A function-based tool implementation.
///
/// The schema document is built from the property descriptors once, in
/// [`FunctionToolBuilder::build`], and cached for the lifetime of the tool.
pub struct FunctionTool {
    name: String,
    description: String,
    schema: Value,
    execute_fn: ToolFn,
}

impl FunctionTool {
    pub fn builder() -> FunctionToolBuilder {
        FunctionToolBuilder::new()
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish()
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        self.schema.clone()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<ToolReply> {
        (self.execute_fn)(ctx, args).await
    }
}

/// Builder for FunctionTool
pub struct FunctionToolBuilder {
    name: Option<String>,
    description: Option<String>,
    properties: Vec<PropertyDescriptor>,
    execute_fn: Option<ToolFn>,
}

impl FunctionToolBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            properties: Vec::new(),
            execute_fn: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Descriptors for the tool's arguments; an empty sequence advertises a
    /// tool that takes none.
    pub fn properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties;
        self
    }

    pub fn execute<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Arc<dyn ToolContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolReply>> + Send + 'static,
    {
        self.execute_fn = Some(Box::new(move |ctx, args| Box::pin(f(ctx, args))));
        self
    }

    pub fn build(self) -> Result<FunctionTool> {
        let schema = SchemaBuilder::build(&self.properties)?;

        Ok(FunctionTool {
            name: self.name.ok_or_else(|| {
                fieldvault_core::Error::Other(anyhow::anyhow!("Tool name is required"))
            })?,
            description: self.description.ok_or_else(|| {
                fieldvault_core::Error::Other(anyhow::anyhow!("Tool description is required"))
            })?,
            schema,
            execute_fn: self.execute_fn.ok_or_else(|| {
                fieldvault_core::Error::Other(anyhow::anyhow!("Tool execute function is required"))
            })?,
        })
    }
}

impl Default for FunctionToolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DefaultToolContext;

    #[tokio::test]
    async fn test_function_tool_creation() {
        let tool = FunctionTool::builder()
            .name("shout")
            .description("Upper-cases the provided text")
            .properties(vec![PropertyDescriptor::string("text", "Text to shout")])
            .execute(|_ctx, args| async move {
                let text = args["text"].as_str().unwrap_or_default();
                Ok(ToolReply::message(text.to_uppercase()))
            })
            .build()
            .unwrap();

        assert_eq!(tool.name(), "shout");
        assert_eq!(tool.description(), "Upper-cases the provided text");

        let schema = tool.schema();
        assert_eq!(schema[0]["propertyName"], "text");

        let ctx = Arc::new(DefaultToolContext::new(
            "shout".to_string(),
            "inv-1".to_string(),
        ));
        let reply = tool
            .execute(ctx, serde_json::json!({"text": "hey"}))
            .await
            .unwrap();
        assert_eq!(reply.message, "HEY");
    }

    #[tokio::test]
    async fn test_schema_cached_at_build_time() {
        let tool = FunctionTool::builder()
            .name("noop")
            .description("Does nothing")
            .execute(|_ctx, _args| async move { Ok(ToolReply::message("ok")) })
            .build()
            .unwrap();

        assert_eq!(tool.schema(), serde_json::json!([]));
        assert_eq!(tool.schema(), tool.schema());
    }

    #[test]
    fn test_builder_requires_name() {
        let result = FunctionTool::builder()
            .description("No name")
            .execute(|_ctx, _args| async move { Ok(ToolReply::message("ok")) })
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_duplicate_properties() {
        let result = FunctionTool::builder()
            .name("dup")
            .description("Duplicate property names")
            .properties(vec![
                PropertyDescriptor::string("a", "First"),
                PropertyDescriptor::string("a", "Second"),
            ])
            .execute(|_ctx, _args| async move { Ok(ToolReply::message("ok")) })
            .build();

        assert!(matches!(result, Err(fieldvault_core::Error::Schema(_))));
    }
}
