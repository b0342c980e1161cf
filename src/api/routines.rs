//! The routine resource.
//!
//! Routines anchor ownership: every routine activity is authorized against
//! its routine's `creator_id`, which is always the authenticated creator and
//! never taken from the request body.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::api::auth::AuthUser;
use crate::api::validate::{validate_fields, FieldPolicy};
use crate::api::AppState;
use crate::clients::StoreHandle;
use crate::model::{Routine, RoutineCreate};
use crate::routine::RoutineError;

const CREATE_FIELDS: FieldPolicy = FieldPolicy::AllRequired(&["name", "goal"]);

/// Wire shape of a create request; `creator_id` is injected from auth.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutineBody {
    name: String,
    goal: String,
    #[serde(default)]
    is_public: bool,
}

/// GET /api/routines
pub async fn list_routines(
    State(state): State<AppState>,
) -> Result<Json<Vec<Routine>>, RoutineError> {
    let routines = state.routines.list().await?;
    Ok(Json(routines))
}

/// GET /api/routines/{routine_id}
pub async fn get_routine(
    State(state): State<AppState>,
    Path(routine_id): Path<String>,
) -> Result<Json<Routine>, RoutineError> {
    let routine = state
        .routines
        .get(routine_id.clone())
        .await?
        .ok_or(RoutineError::NotFound(routine_id))?;
    Ok(Json(routine))
}

/// POST /api/routines
pub async fn create_routine(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<Routine>, RoutineError> {
    validate_fields(CREATE_FIELDS, &body).map_err(|e| RoutineError::Validation(e.to_string()))?;
    let body: RoutineBody =
        serde_json::from_value(body).map_err(|e| RoutineError::Validation(e.to_string()))?;

    let created = state
        .routines
        .create_routine(RoutineCreate {
            creator_id: user_id,
            name: body.name,
            goal: body.goal,
            is_public: body.is_public,
        })
        .await?;
    Ok(Json(created))
}
