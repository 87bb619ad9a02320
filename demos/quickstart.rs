use fieldvault_blob::InMemoryBlobStore;
use fieldvault_host::{Dispatcher, build_registry};
use fieldvault_telemetry::init_telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    init_telemetry();

    println!("=== Fieldvault Quickstart ===\n");

    // Build the storage backend and the immutable tool registry
    let store = InMemoryBlobStore::new();
    let registry = Arc::new(build_registry(Arc::new(store.clone()))?);

    println!("Registered tools:");
    for registration in registry.registrations() {
        println!("  {:<26} {}", registration.name, registration.description);
    }
    println!();

    let dispatcher = Dispatcher::new(registry);

    // Greeting
    let reply = dispatcher.dispatch_raw("hello", "{}").await?;
    println!("hello -> {reply}");

    // Save and read back a snippet
    let reply = dispatcher
        .dispatch_raw(
            "save_snippet",
            r#"{"arguments": {"snippetname": "greeting", "snippet": "println!(\"hi\");"}}"#,
        )
        .await?;
    println!("save_snippet -> {reply}");

    let reply = dispatcher
        .dispatch_raw(
            "get_snippet",
            r#"{"arguments": {"snippetname": "greeting"}}"#,
        )
        .await?;
    println!("get_snippet -> {reply}");

    // Persist a flat sensor reading
    let reply = dispatcher
        .dispatch_raw(
            "save_simple_sensor_data",
            r#"{"arguments": {
                "sensor_id": "s1",
                "metric_name": "temperature",
                "value": 21.5,
                "unit": "C",
                "timestamp": "2026-01-01T00-00-00",
                "IsCalibrated": true
            }}"#,
        )
        .await?;
    println!("save_simple_sensor_data -> {reply}");

    // Persist a nested device report
    let reply = dispatcher
        .dispatch_raw(
            "save_complex_sensor_data",
            r#"{"arguments": {
                "device_id": "dev1",
                "timestamp": "2026-01-01T00-00-00",
                "location": {"latitude": 47.6, "longitude": -122.3, "altitude": 56.0, "description": "rooftop"},
                "sensors": [],
                "events": [],
                "configuration": {
                    "sampling_interval_sec": 60,
                    "transmit_interval_sec": 300,
                    "firmware_version": "1.4.2",
                    "network": {"type": "wifi", "ssid": "field-net", "ip": "10.0.0.7"}
                }
            }}"#,
        )
        .await?;
    println!("save_complex_sensor_data -> {reply}");

    println!("\nBlobs stored: {}", store.len());

    Ok(())
}
