//! The activity resource.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::activity::ActivityError;
use crate::api::auth::AuthUser;
use crate::api::validate::{validate_fields, FieldPolicy};
use crate::api::AppState;
use crate::clients::StoreHandle;
use crate::model::{Activity, ActivityCreate};

const CREATE_FIELDS: FieldPolicy = FieldPolicy::AllRequired(&["name", "description"]);

/// GET /api/activities
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Activity>>, ActivityError> {
    let activities = state.activities.list().await?;
    Ok(Json(activities))
}

/// GET /api/activities/{activity_id}
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<Activity>, ActivityError> {
    let activity = state
        .activities
        .get(activity_id.clone())
        .await?
        .ok_or(ActivityError::NotFound(activity_id))?;
    Ok(Json(activity))
}

/// POST /api/activities
pub async fn create_activity(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<Activity>, ActivityError> {
    validate_fields(CREATE_FIELDS, &body).map_err(|e| ActivityError::Validation(e.to_string()))?;
    let params: ActivityCreate =
        serde_json::from_value(body).map_err(|e| ActivityError::Validation(e.to_string()))?;

    let created = state.activities.create_activity(params).await?;
    Ok(Json(created))
}
