use super::{argument_map, storage_error, string_arg};
use crate::definitions::{snippet_lookup_properties, snippet_save_properties};
use crate::FunctionTool;
use fieldvault_blob::{BlobStore, BlobTemplate};
use fieldvault_core::{Result, ToolReply};
use std::sync::Arc;

/// Argument carrying the snippet name
pub const SNIPPET_NAME_ARG: &str = "snippetname";

/// Argument carrying the snippet content
pub const SNIPPET_CONTENT_ARG: &str = "snippet";

/// Blob path template shared by the snippet read and write tools
pub const SNIPPET_BLOB_TEMPLATE: &str = "snippets/{snippetname}.json";

/// Creates the tool that retrieves a snippet by name.
///
/// The snippet content is returned verbatim; a missing blob is a storage
/// failure handled by the host, not a reply.
pub fn create_get_snippet_tool(store: Arc<dyn BlobStore>) -> Result<FunctionTool> {
    let template = BlobTemplate::new(SNIPPET_BLOB_TEMPLATE);

    FunctionTool::builder()
        .name("get_snippet")
        .description("Retrieve a snippet by name.")
        .properties(snippet_lookup_properties())
        .execute(move |ctx, args| {
            let store = store.clone();
            let template = template.clone();

            async move {
                let args = argument_map(&args);
                let path = template.resolve(&args).map_err(storage_error)?;

                let content = store.read(&path).await.map_err(storage_error)?;

                tracing::info!(
                    invocation_id = %ctx.invocation_id(),
                    path = %path,
                    "Retrieved snippet"
                );

                Ok(ToolReply::message(content))
            }
        })
        .build()
}

/// Creates the tool that saves a snippet under a name
pub fn create_save_snippet_tool(store: Arc<dyn BlobStore>) -> Result<FunctionTool> {
    let template = BlobTemplate::new(SNIPPET_BLOB_TEMPLATE);

    FunctionTool::builder()
        .name("save_snippet")
        .description("Save a snippet with a name.")
        .properties(snippet_save_properties())
        .execute(move |ctx, args| {
            let store = store.clone();
            let template = template.clone();

            async move {
                let args = argument_map(&args);
                let snippet_name = string_arg(&args, SNIPPET_NAME_ARG);
                let snippet_content = string_arg(&args, SNIPPET_CONTENT_ARG);

                if snippet_name.is_empty() {
                    return Ok(ToolReply::message("No snippet name provided"));
                }

                if snippet_content.is_empty() {
                    return Ok(ToolReply::message("No snippet content provided"));
                }

                let path = template.resolve(&args).map_err(storage_error)?;
                store
                    .write(&path, &snippet_content)
                    .await
                    .map_err(storage_error)?;

                tracing::info!(
                    invocation_id = %ctx.invocation_id(),
                    path = %path,
                    "Saved snippet"
                );

                Ok(ToolReply::message(format!(
                    "Snippet '{snippet_content}' saved successfully"
                )))
            }
        })
        .build()
}
