//! Routine store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RoutineClient;
use crate::framework::StoreActor;
use crate::model::Routine;

/// Creates a new Routine store and its client.
pub fn new() -> (StoreActor<Routine>, RoutineClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = RoutineClient::new(generic_client);

    (actor, client)
}
