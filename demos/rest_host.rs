use fieldvault_core::VaultConfig;
use fieldvault_host::{build_registry, build_store, serve};
use fieldvault_telemetry::init_telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    init_telemetry();

    // Load configuration, falling back to defaults when no file is present
    let config = VaultConfig::load().unwrap_or_default();

    let store = build_store(&config.storage);
    let registry = Arc::new(build_registry(store)?);

    println!(
        "Serving {} tools on {}:{}",
        registry.len(),
        config.server.host,
        config.server.port
    );

    serve(&config.server, registry).await?;

    Ok(())
}
