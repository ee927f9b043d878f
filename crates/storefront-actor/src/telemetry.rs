//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every actor and
//! client in the workspace.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the module prefix hidden (`with_target(false)`); actors log
//!   their `state_type` field instead
//!
//! ```bash
//! # Lifecycle and state transitions
//! RUST_LOG=info cargo run -- products
//!
//! # Every request/event with its payload
//! RUST_LOG=debug cargo run -- order 17 --phone 01700000000 --address "Dhaka"
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown of each state actor
//! - **Messages**: every request and event at `debug`, with the `?` (Debug) field syntax
//! - **Client calls**: `#[instrument]` spans around the domain client methods
//! - **Errors**: failed hooks and transport errors at `warn`

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
