//! HTTP surface of the tracker.
//!
//! Thin axum handlers over the store clients. Each mutating operation is an
//! ordered pipeline of fallible steps - validate the field set, look up
//! current state, run the authorization gate, then mutate - with the first
//! failing step short-circuiting into the error translator in [`error`].
//!
//! # Modules
//!
//! - [`router`] - route table and server entry point
//! - [`routine_activities`] - the routine-activity resource handlers
//! - [`routines`], [`activities`] - supporting resources
//! - [`auth`] - bearer-token authentication extractor
//! - [`validate`] - field-presence validation gate
//! - [`error`] - domain error to HTTP translation

pub mod activities;
pub mod auth;
pub mod error;
pub mod router;
pub mod routine_activities;
pub mod routines;
pub mod validate;

pub use router::build_router;

use crate::clients::{ActivityClient, RoutineActivityClient, RoutineClient};
use auth::SessionRegistry;

/// Shared state handed to every handler.
///
/// Holds only store clients and the session registry - no record data. Every
/// operation consults the stores directly, so there is no process-wide cache
/// to go stale.
#[derive(Clone)]
pub struct AppState {
    pub routine_activities: RoutineActivityClient,
    pub routines: RoutineClient,
    pub activities: ActivityClient,
    pub sessions: SessionRegistry,
}
