//! The routine-activity resource.
//!
//! The mutation protocol is the interesting part here. Each operation runs an
//! ordered pipeline: field validation, existence lookup, authorization gate,
//! store call. The existence check runs before the gate on both PATCH and
//! DELETE, so a nonexistent record is reported as NotFound and a foreign one
//! as Forbidden - the same policy on both paths. The existence pre-check on
//! POST is an optimization for a friendlier error; under racing creates the
//! store's own duplicate-id rejection is the source of truth.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::auth::AuthUser;
use crate::api::validate::{validate_fields, FieldPolicy};
use crate::api::AppState;
use crate::clients::StoreHandle;
use crate::model::{RoutineActivity, RoutineActivityCreate, RoutineActivityUpdate};
use crate::routine_activity::RoutineActivityError;

/// Fields a create request must carry.
const CREATE_FIELDS: FieldPolicy =
    FieldPolicy::AllRequired(&["id", "routineId", "activityId", "duration", "count"]);

/// A PATCH must carry at least one mutable field.
const UPDATE_FIELDS: FieldPolicy = FieldPolicy::AtLeastOne(&["count", "duration"]);

/// Response body for DELETE: a success marker plus the removed record's prior
/// field values.
#[derive(Debug, Serialize)]
pub struct DeletedRoutineActivity {
    pub success: bool,
    #[serde(flatten)]
    pub record: RoutineActivity,
}

/// GET /api/routine_activities
pub async fn list_routine_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoutineActivity>>, RoutineActivityError> {
    let records = state.routine_activities.list().await?;
    Ok(Json(records))
}

/// GET /api/routine_activities/{routine_activity_id}
///
/// The path id is resolved in the routine-activity identifier space.
pub async fn get_routine_activity(
    State(state): State<AppState>,
    Path(routine_activity_id): Path<String>,
) -> Result<Json<RoutineActivity>, RoutineActivityError> {
    let record = state
        .routine_activities
        .get(routine_activity_id.clone())
        .await?
        .ok_or(RoutineActivityError::NotFound(routine_activity_id))?;
    Ok(Json(record))
}

/// POST /api/routine_activities
pub async fn create_routine_activity(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<RoutineActivity>, RoutineActivityError> {
    validate_fields(CREATE_FIELDS, &body)
        .map_err(|e| RoutineActivityError::Validation(e.to_string()))?;
    let params: RoutineActivityCreate =
        serde_json::from_value(body).map_err(|e| RoutineActivityError::Validation(e.to_string()))?;

    if state
        .routine_activities
        .get(params.id.clone())
        .await?
        .is_some()
    {
        return Err(RoutineActivityError::AlreadyExists(params.id));
    }

    let created = state
        .routine_activities
        .create_routine_activity(params)
        .await?;
    Ok(Json(created))
}

/// PATCH /api/routine_activities/{routine_activity_id}
pub async fn update_routine_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(routine_activity_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<RoutineActivity>, RoutineActivityError> {
    validate_fields(UPDATE_FIELDS, &body)
        .map_err(|e| RoutineActivityError::Validation(e.to_string()))?;
    let update: RoutineActivityUpdate =
        serde_json::from_value(body).map_err(|e| RoutineActivityError::Validation(e.to_string()))?;

    if state
        .routine_activities
        .get(routine_activity_id.clone())
        .await?
        .is_none()
    {
        return Err(RoutineActivityError::NotFound(routine_activity_id));
    }

    if !state
        .routine_activities
        .can_edit(&routine_activity_id, &user_id)
        .await?
    {
        return Err(RoutineActivityError::Forbidden {
            id: routine_activity_id,
            user_id,
        });
    }

    let updated = state
        .routine_activities
        .update_routine_activity(routine_activity_id, update)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/routine_activities/{routine_activity_id}
pub async fn delete_routine_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(routine_activity_id): Path<String>,
) -> Result<Json<DeletedRoutineActivity>, RoutineActivityError> {
    if state
        .routine_activities
        .get(routine_activity_id.clone())
        .await?
        .is_none()
    {
        return Err(RoutineActivityError::NotFound(routine_activity_id));
    }

    if !state
        .routine_activities
        .can_edit(&routine_activity_id, &user_id)
        .await?
    {
        return Err(RoutineActivityError::Forbidden {
            id: routine_activity_id,
            user_id,
        });
    }

    let record = state.routine_activities.delete(routine_activity_id).await?;
    Ok(Json(DeletedRoutineActivity {
        success: true,
        record,
    }))
}
