//! # Routine Tracker
//!
//! > **A fitness-tracker API with actor-backed entity stores.**
//!
//! This crate serves a small REST resource - the *routine activity*, a join
//! record binding a routine to an activity with a duration and repetition
//! count - with an authorization-gated mutation protocol: only the owner of
//! the parent routine may change or delete a record, duplicate identifiers
//! are rejected on create, and every domain outcome maps to a specific HTTP
//! status and `{name, message}` error body.
//!
//! ## Architecture
//!
//! The codebase is organized into four layers:
//!
//! ### 1. The Engine ([`framework`])
//! A generic store actor: one Tokio task per entity type owning its records
//! and answering CRUD messages over a channel.
//! - **Role**: separates the record semantics (your entity) from the plumbing
//!   (channels, message loop, error mapping).
//! - **Key items**: [`StoreEntity`](framework::StoreEntity),
//!   [`StoreActor`](framework::StoreActor).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Spins up the stores and wires their dependencies.
//! - **Key items**: [`TrackerSystem`](lifecycle::TrackerSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific clients over the generic store client, including the
//! authorization gate
//! ([`can_edit`](clients::RoutineActivityClient::can_edit)).
//!
//! ### 4. The HTTP Surface ([`api`])
//! axum handlers implementing the resource operations as ordered pipelines of
//! fallible steps: validate, look up, authorize, mutate.
//!
//! ## Concurrency Model
//!
//! Each store actor processes its messages sequentially (no locks for its
//! records) while requests are handled concurrently on the runtime. Handler
//! sequences like existence-check-then-create are not transactional; the
//! store re-checks id uniqueness itself, so a racing duplicate create loses
//! cleanly rather than overwriting.
//!
//! ## Running
//!
//! ```bash
//! TRACKER_TOKENS=s3cret:user_1 RUST_LOG=info cargo run
//! ```

pub mod activity;
pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod routine;
pub mod routine_activity;
