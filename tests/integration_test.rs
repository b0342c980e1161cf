use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use routine_tracker::api::auth::{AuthUser, SessionRegistry};
use routine_tracker::api::routine_activities::{
    create_routine_activity, delete_routine_activity, get_routine_activity,
    list_routine_activities, update_routine_activity,
};
use routine_tracker::api::{activities, routines, AppState};
use routine_tracker::lifecycle::TrackerSystem;
use routine_tracker::routine_activity::RoutineActivityError;

/// Full end-to-end tests with all real store actors.
///
/// These walk the complete resource lifecycle through the HTTP handlers:
/// supporting records first, then create / read / update / delete of a
/// routine activity under the ownership rules.

fn app_state(system: &TrackerSystem) -> AppState {
    AppState {
        routine_activities: system.routine_activity_client.clone(),
        routines: system.routine_client.clone(),
        activities: system.activity_client.clone(),
        sessions: SessionRegistry::new([
            ("owner-token".to_string(), "user_1".to_string()),
            ("intruder-token".to_string(), "user_2".to_string()),
        ]),
    }
}

fn owner() -> AuthUser {
    AuthUser("user_1".to_string())
}

fn intruder() -> AuthUser {
    AuthUser("user_2".to_string())
}

#[tokio::test]
async fn test_full_routine_activity_lifecycle() {
    let system = TrackerSystem::new();
    let state = app_state(&system);

    // Supporting records: an activity and a routine owned by user_1
    let activity = activities::create_activity(
        State(state.clone()),
        owner(),
        Json(json!({ "name": "Squats", "description": "Barbell back squats" })),
    )
    .await
    .expect("Failed to create activity")
    .0;

    let routine = routines::create_routine(
        State(state.clone()),
        owner(),
        Json(json!({ "name": "Leg day", "goal": "Stronger legs", "isPublic": true })),
    )
    .await
    .expect("Failed to create routine")
    .0;
    assert_eq!(routine.creator_id, "user_1");

    // Create the join record with a caller-supplied id
    let body = json!({
        "id": "a1",
        "routineId": routine.id,
        "activityId": activity.id,
        "duration": 30,
        "count": 3,
    });
    let created = create_routine_activity(State(state.clone()), owner(), Json(body.clone()))
        .await
        .expect("Failed to create routine activity")
        .0;
    assert_eq!(created.id, "a1");
    assert_eq!(created.routine_id, routine.id);
    assert_eq!(created.activity_id, activity.id);
    assert_eq!(created.duration, 30);
    assert_eq!(created.count, 3);

    // A second create with the same id is a conflict
    let duplicate = create_routine_activity(State(state.clone()), owner(), Json(body)).await;
    assert_eq!(
        duplicate.err(),
        Some(RoutineActivityError::AlreadyExists("a1".to_string()))
    );

    // The list includes the record with its exact field values
    let listed = list_routine_activities(State(state.clone()))
        .await
        .expect("Failed to list routine activities")
        .0;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    // Fetch by id resolves the routine-activity identifier space
    let fetched = get_routine_activity(State(state.clone()), Path("a1".to_string()))
        .await
        .expect("Failed to get routine activity")
        .0;
    assert_eq!(fetched, created);

    // A non-owner with a valid session cannot mutate
    let forbidden = update_routine_activity(
        State(state.clone()),
        intruder(),
        Path("a1".to_string()),
        Json(json!({ "duration": 99 })),
    )
    .await;
    assert_eq!(
        forbidden.err(),
        Some(RoutineActivityError::Forbidden {
            id: "a1".to_string(),
            user_id: "user_2".to_string(),
        })
    );

    // The owner's partial update changes only the supplied field
    let updated = update_routine_activity(
        State(state.clone()),
        owner(),
        Path("a1".to_string()),
        Json(json!({ "duration": 45 })),
    )
    .await
    .expect("Failed to update routine activity")
    .0;
    assert_eq!(updated.duration, 45);
    assert_eq!(updated.count, 3, "count must be untouched");

    // The owner deletes; the response carries the prior field values
    let deleted = delete_routine_activity(State(state.clone()), owner(), Path("a1".to_string()))
        .await
        .expect("Failed to delete routine activity")
        .0;
    assert!(deleted.success);
    assert_eq!(deleted.record.id, "a1");
    assert_eq!(deleted.record.duration, 45);

    // The wire shape is a flat object: success marker beside the fields
    let wire = serde_json::to_value(&deleted).unwrap();
    assert_eq!(wire["success"], json!(true));
    assert_eq!(wire["id"], json!("a1"));
    assert_eq!(wire["routineId"], json!(routine.id));

    // The record is gone
    let gone = get_routine_activity(State(state.clone()), Path("a1".to_string())).await;
    assert_eq!(
        gone.err(),
        Some(RoutineActivityError::NotFound("a1".to_string()))
    );

    drop(state);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_create_with_dangling_reference_fails() {
    let system = TrackerSystem::new();
    let state = app_state(&system);

    // No routine or activity exists yet; the store rejects the join record
    let result = create_routine_activity(
        State(state.clone()),
        owner(),
        Json(json!({
            "id": "a1",
            "routineId": "routine_404",
            "activityId": "activity_404",
            "duration": 10,
            "count": 1,
        })),
    )
    .await;

    match result {
        Err(RoutineActivityError::CreationFailed(message)) => {
            assert!(message.contains("routine_404"), "got: {message}");
        }
        other => panic!("Expected creation failure, got {:?}", other.map(|j| j.0)),
    }

    // Nothing was stored
    let listed = list_routine_activities(State(state.clone())).await.unwrap().0;
    assert!(listed.is_empty());

    drop(state);
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent creates racing on the same id: the store's own uniqueness check
/// is the source of truth, so exactly one wins regardless of how the
/// existence pre-checks interleave.
#[tokio::test]
async fn test_concurrent_duplicate_creates() {
    let system = TrackerSystem::new();
    let state = app_state(&system);

    let activity = activities::create_activity(
        State(state.clone()),
        owner(),
        Json(json!({ "name": "Plank", "description": "Core hold" })),
    )
    .await
    .unwrap()
    .0;
    let routine = routines::create_routine(
        State(state.clone()),
        owner(),
        Json(json!({ "name": "Core", "goal": "Stability" })),
    )
    .await
    .unwrap()
    .0;

    let mut handles = vec![];
    for _ in 0..10 {
        let state = state.clone();
        let body = json!({
            "id": "contested",
            "routineId": routine.id,
            "activityId": activity.id,
            "duration": 5,
            "count": 1,
        });
        handles.push(tokio::spawn(async move {
            create_routine_activity(State(state), owner(), Json(body)).await
        }));
    }

    let mut successful = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(RoutineActivityError::AlreadyExists(_)) => conflicts += 1,
            Err(other) => panic!("Unexpected error: {other:?}"),
        }
    }
    assert_eq!(successful, 1, "Exactly one create may win");
    assert_eq!(conflicts, 9);

    let listed = list_routine_activities(State(state.clone())).await.unwrap().0;
    assert_eq!(listed.len(), 1);

    drop(state);
    system.shutdown().await.expect("Failed to shutdown system");
}
