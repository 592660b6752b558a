//! In-memory user service behavior used by `--stubs` mode and tests.

use std::time::Duration;

use reqwest::StatusCode;
use userdeck_admin::infra::api_client::ApiError;
use userdeck_admin::infra::services::UserAdminService;
use userdeck_admin::infra::testing::StubUserAdminService;
use userdeck_model::{NewUser, UserId};

#[tokio::test]
async fn demo_directory_is_varied() {
    let stub = StubUserAdminService::with_demo_users();
    let users = stub.list_users().await.expect("demo users");

    assert_eq!(users.len(), 5);
    assert!(users.iter().any(|user| user.is_admin()));
    assert!(users.iter().any(|user| !user.is_active()));
    assert!(users.iter().any(|user| user.last_login.is_none()));
    assert_eq!(stub.list_calls(), 1);
}

#[tokio::test]
async fn failure_surfaces_as_status_error_until_cleared() {
    let stub = StubUserAdminService::with_users(vec![
        NewUser::default().with_id(UserId(1)),
    ]);
    stub.fail_with(StatusCode::SERVICE_UNAVAILABLE);

    match stub.list_users().await {
        Err(ApiError::Status { status, .. }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE)
        }
        other => panic!("expected status error, got {:?}", other),
    }

    stub.clear_failure();
    let users = stub.list_users().await.expect("users after recovery");
    assert_eq!(users.len(), 1);
    assert_eq!(stub.list_calls(), 2);
}

#[tokio::test]
async fn clones_share_state() {
    let stub = StubUserAdminService::new();
    let handle = stub.clone();
    handle.set_users(vec![NewUser::default().with_id(UserId(7))]);

    let users = stub.list_users().await.expect("users");
    assert_eq!(users[0].id, UserId(7));
    assert_eq!(handle.list_calls(), 1);
}

#[tokio::test]
async fn latency_delays_the_response() {
    let stub = StubUserAdminService::with_users(Vec::new());
    stub.set_latency(Some(Duration::from_millis(50)));

    let started = tokio::time::Instant::now();
    let users = stub.list_users().await.expect("users");

    assert!(users.is_empty());
    assert!(started.elapsed() >= Duration::from_millis(50));
}
