//! Generic actor-based store framework.
//!
//! This module provides the building blocks for the entity stores: a single
//! generic message loop that owns records of one type and answers CRUD
//! requests over a channel.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that record types implement to be managed by a store
//! - [`StoreActor`] - Generic actor that owns the records
//! - [`StoreClient`] - Type-safe handle for talking to a store
//! - [`StoreError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for scripting store responses without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
