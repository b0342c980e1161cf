//! Activity store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ActivityClient;
use crate::framework::StoreActor;
use crate::model::Activity;

/// Creates a new Activity store and its client.
pub fn new() -> (StoreActor<Activity>, ActivityClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = ActivityClient::new(generic_client);

    (actor, client)
}
