//! Built-in tools backed by blob storage

mod hello;
mod sensor;
mod snippets;

pub use hello::{GREETING, create_hello_tool};
pub use sensor::{
    COMPLEX_SENSOR_BLOB_TEMPLATE, DEVICE_ID_ARG, SIMPLE_SENSOR_BLOB_TEMPLATE,
    create_save_complex_sensor_data_tool, create_save_simple_sensor_data_tool,
};
pub use snippets::{
    SNIPPET_BLOB_TEMPLATE, SNIPPET_CONTENT_ARG, SNIPPET_NAME_ARG, create_get_snippet_tool,
    create_save_snippet_tool,
};

use fieldvault_blob::BlobError;
use fieldvault_core::Error;
use serde_json::{Map, Value};

/// Extract the argument mapping from the payload value.
///
/// Anything other than a JSON object is treated as an empty mapping; the
/// tools then report the corresponding "no data" reply.
pub(crate) fn argument_map(args: &Value) -> Map<String, Value> {
    args.as_object().cloned().unwrap_or_default()
}

/// Read a string argument, treating absent and non-string values as empty
pub(crate) fn string_arg(args: &Map<String, Value>, name: &str) -> String {
    args.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Storage failures propagate to the host fault handling, not into replies
pub(crate) fn storage_error(err: BlobError) -> Error {
    Error::Storage(err.to_string())
}
