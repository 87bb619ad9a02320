//! # Fieldvault Telemetry
//!
//! Structured logging setup for Fieldvault services. Every tool invocation,
//! dispatch decision, and storage operation logs through `tracing`; this
//! crate wires the subscriber that renders those events.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize telemetry with structured logging output.
///
/// This sets up a tracing subscriber with:
/// - a fmt layer carrying target, level, and line numbers
/// - an `EnvFilter` honoring `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```rust,no_run
/// use fieldvault_telemetry::init_telemetry;
///
/// init_telemetry();
/// ```
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_line_number(true),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
