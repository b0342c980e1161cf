//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole service.
//!
//! The subscriber uses a compact format and hides the crate/module prefix
//! (`with_target(false)`); store log lines carry an `entity_type` field
//! instead, which keeps them short while still filterable.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads at store boundaries
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store framework only
//! RUST_LOG=routine_tracker::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown, and final record counts
//! - **Record operations**: Create, Get, List, Update, Delete with `%id`
//! - **HTTP handlers**: one span per operation via `#[instrument]` on the
//!   typed clients
//! - **Errors**: structured failure reasons with the offending id

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise - entity_type carries the context
        .compact()
        .init();
}
