use serde::{Deserialize, Serialize};

/// A named collection of activities owned by a user.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](crate::framework::StoreActor).
///
/// The `creator_id` is the authorization basis for every routine activity
/// that references this routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub creator_id: String,
    pub name: String,
    pub goal: String,
    pub is_public: bool,
}

/// Payload for creating a new routine. The `creator_id` is taken from the
/// authenticated user, never from the request body.
#[derive(Debug, Clone)]
pub struct RoutineCreate {
    pub creator_id: String,
    pub name: String,
    pub goal: String,
    pub is_public: bool,
}
