use serde::{Deserialize, Serialize};

/// A reusable exercise definition referenced by routine activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Payload for creating a new activity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreate {
    pub name: String,
    pub description: String,
}
