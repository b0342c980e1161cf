//! Routine-activity store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{RoutineActivityClient, RoutineClient};
use crate::framework::StoreActor;
use crate::model::RoutineActivity;

/// Creates a new RoutineActivity store and its client.
///
/// The client needs the routine store to resolve ownership (the authorization
/// basis for every mutation), so it is wired in here.
pub fn new(routines: RoutineClient) -> (StoreActor<RoutineActivity>, RoutineActivityClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = RoutineActivityClient::new(generic_client, routines);

    (actor, client)
}
