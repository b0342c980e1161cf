//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the application's
//! runtime environment:
//!
//! - **Store lifecycle management**: starting, wiring, and shutting down the
//!   store actors
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`TrackerSystem`] - The orchestrator that owns all stores and their clients
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;
pub mod tracker_system;

pub use self::tracing::setup_tracing;
pub use tracker_system::*;
