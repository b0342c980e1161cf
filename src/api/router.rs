//! Route table and liveness probe.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::api::{activities, routine_activities, routines};

/// Builds the service router over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/routine_activities",
            get(routine_activities::list_routine_activities)
                .post(routine_activities::create_routine_activity),
        )
        .route(
            "/api/routine_activities/{routine_activity_id}",
            get(routine_activities::get_routine_activity)
                .patch(routine_activities::update_routine_activity)
                .delete(routine_activities::delete_routine_activity),
        )
        .route(
            "/api/routines",
            get(routines::list_routines).post(routines::create_routine),
        )
        .route("/api/routines/{routine_id}", get(routines::get_routine))
        .route(
            "/api/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route("/api/activities/{activity_id}", get(activities::get_activity))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
