use super::{argument_map, storage_error, string_arg};
use crate::definitions::{complex_sensor_properties, simple_sensor_properties};
use crate::FunctionTool;
use fieldvault_blob::{BlobStore, BlobTemplate};
use fieldvault_core::{Result, ToolReply};
use serde_json::Value;
use std::sync::Arc;

/// Argument identifying the reporting device in complex sensor data
pub const DEVICE_ID_ARG: &str = "device_id";

/// Blob path template for flat sensor readings
pub const SIMPLE_SENSOR_BLOB_TEMPLATE: &str = "simple-sensor-data/{timestamp}-{sensor_id}.json";

/// Blob path template for full device reports
pub const COMPLEX_SENSOR_BLOB_TEMPLATE: &str = "complex-sensor-data/{timestamp}-{device_id}.json";

/// Creates the tool that persists one flat sensor reading.
///
/// The whole argument mapping is re-encoded and written as the stored
/// object.
pub fn create_save_simple_sensor_data_tool(store: Arc<dyn BlobStore>) -> Result<FunctionTool> {
    let template = BlobTemplate::new(SIMPLE_SENSOR_BLOB_TEMPLATE);

    FunctionTool::builder()
        .name("save_simple_sensor_data")
        .description("Save sensor data.")
        .properties(simple_sensor_properties())
        .execute(move |ctx, args| {
            let store = store.clone();
            let template = template.clone();

            async move {
                let args = argument_map(&args);

                if args.is_empty() {
                    return Ok(ToolReply::message("No sensor data provided"));
                }

                let path = template.resolve(&args).map_err(storage_error)?;
                let payload = serde_json::to_string(&Value::Object(args))?;
                store.write(&path, &payload).await.map_err(storage_error)?;

                tracing::info!(
                    invocation_id = %ctx.invocation_id(),
                    path = %path,
                    "Saved sensor data"
                );

                Ok(ToolReply::message("Sensor data saved successfully"))
            }
        })
        .build()
}

/// Creates the tool that persists a full nested device report
pub fn create_save_complex_sensor_data_tool(store: Arc<dyn BlobStore>) -> Result<FunctionTool> {
    let template = BlobTemplate::new(COMPLEX_SENSOR_BLOB_TEMPLATE);

    FunctionTool::builder()
        .name("save_complex_sensor_data")
        .description(
            "Save complex IoT device data with nested sensor, event, and configuration information.",
        )
        .properties(complex_sensor_properties())
        .execute(move |ctx, args| {
            let store = store.clone();
            let template = template.clone();

            async move {
                let args = argument_map(&args);

                if args.is_empty() {
                    return Ok(ToolReply::message("No device data provided"));
                }

                let device_id = string_arg(&args, DEVICE_ID_ARG);
                if device_id.is_empty() {
                    return Ok(ToolReply::message("Device ID is required"));
                }

                let path = template.resolve(&args).map_err(storage_error)?;
                let payload = serde_json::to_string(&Value::Object(args))?;
                store.write(&path, &payload).await.map_err(storage_error)?;

                tracing::info!(
                    invocation_id = %ctx.invocation_id(),
                    device_id = %device_id,
                    path = %path,
                    "Saved device data"
                );

                Ok(ToolReply::message(format!(
                    "Device data for {device_id} saved successfully"
                )))
            }
        })
        .build()
}
