use axum::extract::{FromRequestParts, Path, State};
use axum::http::Request;
use axum::Json;
use serde_json::json;

use routine_tracker::api::auth::{AuthError, AuthUser, SessionRegistry};
use routine_tracker::api::routine_activities::{
    create_routine_activity, delete_routine_activity, update_routine_activity,
};
use routine_tracker::api::AppState;
use routine_tracker::clients::{ActivityClient, RoutineActivityClient, RoutineClient};
use routine_tracker::framework::{mock::MockClient, StoreError};
use routine_tracker::model::{Activity, Routine, RoutineActivity};
use routine_tracker::routine_activity::RoutineActivityError;

/// Handler tests against scripted stores.
///
/// Pattern: handlers + mocks. The mock panics on any store operation without
/// a matching expectation, so these tests prove not only the response but
/// also which operations never reached the store.

fn sample_record() -> RoutineActivity {
    RoutineActivity {
        id: "a1".to_string(),
        routine_id: "r1".to_string(),
        activity_id: "act1".to_string(),
        duration: 30,
        count: 3,
    }
}

fn owned_routine(creator_id: &str) -> Routine {
    Routine {
        id: "r1".to_string(),
        creator_id: creator_id.to_string(),
        name: "Leg day".to_string(),
        goal: "Stronger legs".to_string(),
        is_public: true,
    }
}

fn mock_state(
    routine_activities: &MockClient<RoutineActivity>,
    routines: &MockClient<Routine>,
    activities: &MockClient<Activity>,
) -> AppState {
    let routine_client = RoutineClient::new(routines.client());
    AppState {
        routine_activities: RoutineActivityClient::new(
            routine_activities.client(),
            routine_client.clone(),
        ),
        routines: routine_client,
        activities: ActivityClient::new(activities.client()),
        sessions: SessionRegistry::new([("s3cret".to_string(), "user_1".to_string())]),
    }
}

#[tokio::test]
async fn create_with_missing_fields_never_reaches_the_store() {
    let ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();
    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);

    // routineId, activityId and duration are absent
    let body = json!({ "id": "a1", "count": 3 });
    let result = create_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Json(body),
    )
    .await;

    match result {
        Err(RoutineActivityError::Validation(message)) => {
            assert!(message.contains("routineId"), "got: {message}");
            assert!(message.contains("activityId"), "got: {message}");
            assert!(message.contains("duration"), "got: {message}");
        }
        other => panic!("Expected validation error, got {:?}", other.map(|j| j.0)),
    }

    // No expectations were registered: any store call would have panicked
    ra_mock.verify();
    routine_mock.verify();
    activity_mock.verify();
}

#[tokio::test]
async fn create_with_existing_id_is_a_conflict_and_skips_create() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    // Only the existence pre-check is expected - no create
    ra_mock
        .expect_get("a1".to_string())
        .return_ok(Some(sample_record()));

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let body = json!({
        "id": "a1",
        "routineId": "r1",
        "activityId": "act1",
        "duration": 30,
        "count": 3,
    });
    let result = create_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Json(body),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::AlreadyExists("a1".to_string()))
    );
    ra_mock.verify();
}

#[tokio::test]
async fn create_rejected_by_the_store_is_a_creation_failure() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    ra_mock.expect_get("a1".to_string()).return_ok(None);
    ra_mock
        .expect_create()
        .return_err(StoreError::Rejected("routine r1 does not exist".to_string()));

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let body = json!({
        "id": "a1",
        "routineId": "r1",
        "activityId": "act1",
        "duration": 30,
        "count": 3,
    });
    let result = create_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Json(body),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::CreationFailed(
            "routine r1 does not exist".to_string()
        ))
    );
    ra_mock.verify();
}

#[tokio::test]
async fn update_by_non_owner_is_forbidden_and_never_mutates() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let mut routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    // Existence check, then the gate re-resolves the record and its routine.
    // The routine belongs to someone else - no update expectation follows.
    ra_mock
        .expect_get("a1".to_string())
        .return_ok(Some(sample_record()));
    ra_mock
        .expect_get("a1".to_string())
        .return_ok(Some(sample_record()));
    routine_mock
        .expect_get("r1".to_string())
        .return_ok(Some(owned_routine("user_2")));

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let result = update_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Path("a1".to_string()),
        Json(json!({ "duration": 45 })),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::Forbidden {
            id: "a1".to_string(),
            user_id: "user_1".to_string(),
        })
    );
    ra_mock.verify();
    routine_mock.verify();
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden_and_never_mutates() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let mut routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    ra_mock
        .expect_get("a1".to_string())
        .return_ok(Some(sample_record()));
    ra_mock
        .expect_get("a1".to_string())
        .return_ok(Some(sample_record()));
    routine_mock
        .expect_get("r1".to_string())
        .return_ok(Some(owned_routine("user_2")));

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let result = delete_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Path("a1".to_string()),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::Forbidden {
            id: "a1".to_string(),
            user_id: "user_1".to_string(),
        })
    );
    ra_mock.verify();
    routine_mock.verify();
}

#[tokio::test]
async fn update_of_missing_record_is_not_found_and_never_mutates() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    ra_mock.expect_get("ghost".to_string()).return_ok(None);

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let result = update_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Path("ghost".to_string()),
        Json(json!({ "count": 1 })),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::NotFound("ghost".to_string()))
    );
    ra_mock.verify();
    routine_mock.verify();
}

#[tokio::test]
async fn delete_of_missing_record_is_not_found_and_never_mutates() {
    let mut ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    ra_mock.expect_get("ghost".to_string()).return_ok(None);

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let result = delete_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Path("ghost".to_string()),
    )
    .await;

    assert_eq!(
        result.err(),
        Some(RoutineActivityError::NotFound("ghost".to_string()))
    );
    ra_mock.verify();
    routine_mock.verify();
}

#[tokio::test]
async fn update_with_empty_body_fails_validation_before_any_lookup() {
    let ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();

    let state = mock_state(&ra_mock, &routine_mock, &activity_mock);
    let result = update_routine_activity(
        State(state),
        AuthUser("user_1".to_string()),
        Path("a1".to_string()),
        Json(json!({})),
    )
    .await;

    match result {
        Err(RoutineActivityError::Validation(message)) => {
            assert!(message.contains("count"), "got: {message}");
            assert!(message.contains("duration"), "got: {message}");
        }
        other => panic!("Expected validation error, got {:?}", other.map(|j| j.0)),
    }
    ra_mock.verify();
}

// --- Auth extractor ---

fn auth_state() -> AppState {
    let ra_mock = MockClient::<RoutineActivity>::new();
    let routine_mock = MockClient::<Routine>::new();
    let activity_mock = MockClient::<Activity>::new();
    mock_state(&ra_mock, &routine_mock, &activity_mock)
}

#[tokio::test]
async fn auth_extractor_resolves_a_known_token() {
    let state = auth_state();
    let (mut parts, _) = Request::builder()
        .header("Authorization", "Bearer s3cret")
        .body(())
        .unwrap()
        .into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(user, AuthUser("user_1".to_string()));
}

#[tokio::test]
async fn auth_extractor_rejects_missing_and_unknown_credentials() {
    let state = auth_state();

    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
    let missing = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(missing, Err(AuthError::MissingCredentials));

    let (mut parts, _) = Request::builder()
        .header("Authorization", "Bearer wrong")
        .body(())
        .unwrap()
        .into_parts();
    let unknown = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(unknown, Err(AuthError::InvalidToken));
}
