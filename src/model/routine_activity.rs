use serde::{Deserialize, Serialize};

/// The join record binding a routine to an activity, with a duration and a
/// repetition count.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](crate::framework::StoreActor).
///
/// Unlike routines and activities, the `id` is supplied by the caller on
/// create; the store rejects a colliding id rather than overwriting.
/// Ownership is not stored on the record: it is resolved through the parent
/// routine's `creator_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineActivity {
    pub id: String,
    pub routine_id: String,
    pub activity_id: String,
    pub duration: u32,
    pub count: u32,
}

/// Payload for creating a new routine activity. All five fields are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineActivityCreate {
    pub id: String,
    pub routine_id: String,
    pub activity_id: String,
    pub duration: u32,
    pub count: u32,
}

/// Payload for updating an existing routine activity.
/// Only `count` and `duration` are mutable; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineActivityUpdate {
    pub count: Option<u32>,
    pub duration: Option<u32>,
}
