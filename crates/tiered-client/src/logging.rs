//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown with the record count
//! - **Store operations**: Create, Get, Update, Delete and Actions, keyed by `family` and `id`
//! - **Tier selection**: every fallback with its `operation` and `reason`
//! - **Transport**: method, path and failure class of each backend call
//!
//! ## Usage Examples
//!
//! ```bash
//! # Fallbacks caused by remote failures, store writes
//! RUST_LOG=info cargo run
//!
//! # Every request, including payloads and expected fallbacks
//! RUST_LOG=debug cargo run
//!
//! # Only the transport
//! RUST_LOG=tiered_client::transport=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` and no credential configured:
//!
//! ```text
//! DEBUG list: Sending request family="events"
//! DEBUG list: Falling back to local data family="events" operation=list reason=no credential configured
//! DEBUG list: List family="events" count=3
//! ```

/// Installs the global subscriber. Later calls are no-ops, so tests may call
/// it freely.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // family is carried as a field instead
        .compact()
        .try_init();
}
