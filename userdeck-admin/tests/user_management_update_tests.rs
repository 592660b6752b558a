//! User management update-loop tests
//!
//! Drive `update` the way the runtime does and inspect the resulting state:
//! load lifecycle, stale results, local add/edit/delete and navigation.

use std::sync::Arc;

use reqwest::StatusCode;
use userdeck_admin::common::messages::DomainMessage;
use userdeck_admin::domains::ui::Section;
use userdeck_admin::domains::ui::messages::Message as UiMessage;
use userdeck_admin::domains::user_management::UsersLoadState;
use userdeck_admin::domains::user_management::filter::{RoleFilter, StatusFilter};
use userdeck_admin::domains::user_management::messages::Message;
use userdeck_admin::domains::user_management::records::IdPolicy;
use userdeck_admin::infra::api_client::ApiError;
use userdeck_admin::infra::services::UserAdminService;
use userdeck_admin::infra::testing::StubUserAdminService;
use userdeck_admin::state::State;
use userdeck_admin::update::update;
use userdeck_model::{NewUser, Role, User, UserId, UserStatus};

fn user(id: i64, name: &str, role: Role, status: UserStatus) -> User {
    NewUser {
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        role: Some(role),
        status: Some(status),
        last_login: None,
    }
    .with_id(UserId(id))
}

fn three_users() -> Vec<User> {
    vec![
        user(1, "Ada", Role::Admin, UserStatus::Active),
        user(2, "Grace", Role::User, UserStatus::Inactive),
        user(3, "Alan", Role::User, UserStatus::Active),
    ]
}

fn state_with_stub(stub: &StubUserAdminService) -> State {
    let mut state = State::default();
    let service: Arc<dyn UserAdminService> = Arc::new(stub.clone());
    state.domains.user_management.state.user_admin_service = Some(service);
    state
}

fn send(state: &mut State, message: impl Into<DomainMessage>) {
    let _ = update(state, message.into());
}

/// Activate the panel and deliver the given result for the issued read.
fn loaded_state(users: Vec<User>) -> State {
    let stub = StubUserAdminService::with_users(users.clone());
    let mut state = state_with_stub(&stub);
    send(&mut state, Message::Activate);
    let generation = state.domains.user_management.state.generation;
    send(
        &mut state,
        Message::UsersLoaded {
            generation,
            result: Ok(users),
        },
    );
    state
}

fn ids(state: &State) -> Vec<i64> {
    state
        .domains
        .user_management
        .state
        .users
        .iter()
        .map(|user| user.id.get())
        .collect()
}

#[tokio::test]
async fn activate_starts_a_load_and_result_replaces_list() {
    let stub = StubUserAdminService::with_users(three_users());
    let mut state = state_with_stub(&stub);

    send(&mut state, Message::Activate);

    let domain = &state.domains.user_management.state;
    match &domain.load_state {
        UsersLoadState::InProgress => {}
        other => panic!("expected InProgress, got {:?}", other),
    }
    assert!(domain.active);
    assert_eq!(domain.generation, 1);

    let result = stub.list_users().await.map_err(Arc::new);
    send(
        &mut state,
        Message::UsersLoaded {
            generation: 1,
            result,
        },
    );

    assert_eq!(ids(&state), vec![1, 2, 3]);
    assert_eq!(
        state.domains.user_management.state.load_state,
        UsersLoadState::Succeeded
    );
}

#[tokio::test]
async fn failed_load_keeps_previous_list() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::Refresh);
    let generation = state.domains.user_management.state.generation;
    send(
        &mut state,
        Message::UsersLoaded {
            generation,
            result: Err(Arc::new(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://localhost:8080/api/users".into(),
            })),
        },
    );

    assert_eq!(ids(&state), vec![1, 2, 3]);
    match &state.domains.user_management.state.load_state {
        UsersLoadState::Failed { last_error } => {
            assert!(last_error.contains("500"), "{last_error}");
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn initial_failure_leaves_list_empty() {
    let mut state = state_with_stub(&StubUserAdminService::new());
    send(&mut state, Message::Activate);
    send(
        &mut state,
        Message::UsersLoaded {
            generation: 1,
            result: Err(Arc::new(ApiError::Status {
                status: StatusCode::BAD_GATEWAY,
                url: "stub://users".into(),
            })),
        },
    );

    assert!(ids(&state).is_empty());
    assert!(matches!(
        state.domains.user_management.state.load_state,
        UsersLoadState::Failed { .. }
    ));
}

#[test]
fn missing_service_marks_load_failed() {
    let mut state = State::default();
    send(&mut state, Message::Activate);

    assert!(matches!(
        state.domains.user_management.state.load_state,
        UsersLoadState::Failed { .. }
    ));
}

#[test]
fn stale_generation_is_discarded() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::Refresh);
    let current = state.domains.user_management.state.generation;
    assert_eq!(current, 2);

    send(
        &mut state,
        Message::UsersLoaded {
            generation: 1,
            result: Ok(vec![user(9, "Late", Role::User, UserStatus::Active)]),
        },
    );

    assert_eq!(ids(&state), vec![1, 2, 3]);
    assert!(state.domains.user_management.state.is_loading());
}

#[test]
fn results_after_leaving_users_panel_are_discarded() {
    let stub = StubUserAdminService::with_users(three_users());
    let mut state = state_with_stub(&stub);
    send(&mut state, Message::Activate);
    let generation = state.domains.user_management.state.generation;

    send(&mut state, UiMessage::SelectSection(Section::Dashboard));
    assert!(!state.domains.user_management.state.active);

    send(
        &mut state,
        Message::UsersLoaded {
            generation,
            result: Ok(three_users()),
        },
    );

    assert!(ids(&state).is_empty());
}

#[test]
fn returning_to_users_panel_reloads_without_clearing() {
    let mut state = loaded_state(three_users());
    send(&mut state, Message::SearchChanged("ada".into()));

    send(&mut state, UiMessage::SelectSection(Section::Settings));
    send(&mut state, UiMessage::SelectSection(Section::Users));

    let domain = &state.domains.user_management.state;
    assert!(domain.active);
    assert_eq!(domain.generation, 2);
    assert!(domain.is_loading());
    assert_eq!(domain.filter.search, "ada");
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn failed_reload_after_navigation_keeps_local_edits() {
    let mut state = loaded_state(three_users());
    send(&mut state, Message::OpenAddModal);
    send(&mut state, Message::FormNameChanged("Barbara".into()));
    send(&mut state, Message::SubmitAdd);
    assert_eq!(ids(&state), vec![1, 2, 3, 4]);

    send(&mut state, UiMessage::SelectSection(Section::Dashboard));
    send(&mut state, UiMessage::SelectSection(Section::Users));
    assert_eq!(ids(&state), vec![1, 2, 3, 4]);

    let generation = state.domains.user_management.state.generation;
    assert_eq!(generation, 2);
    send(
        &mut state,
        Message::UsersLoaded {
            generation,
            result: Err(Arc::new(ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                url: "stub://users".into(),
            })),
        },
    );

    assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    assert!(matches!(
        state.domains.user_management.state.load_state,
        UsersLoadState::Failed { .. }
    ));
}

#[test]
fn refresh_keeps_filters() {
    let mut state = loaded_state(three_users());
    send(&mut state, Message::SearchChanged("gr".into()));
    send(&mut state, Message::Refresh);

    let domain = &state.domains.user_management.state;
    assert_eq!(domain.filter.search, "gr");
    assert!(domain.is_loading());
}

#[test]
fn filters_narrow_visible_rows() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::RoleFilterSelected(RoleFilter::Only(Role::User)));
    send(
        &mut state,
        Message::StatusFilterSelected(StatusFilter::Only(UserStatus::Active)),
    );

    let visible: Vec<i64> = state
        .domains
        .user_management
        .state
        .filtered_users()
        .iter()
        .map(|user| user.id.get())
        .collect();
    assert_eq!(visible, vec![3]);

    send(&mut state, Message::ClearFilters);
    assert_eq!(
        state.domains.user_management.state.filtered_users().len(),
        3
    );
}

#[test]
fn add_appends_and_closes_modal() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::OpenAddModal);
    assert!(state.domains.user_management.state.show_add_modal);

    send(&mut state, Message::FormNameChanged("Edsger".into()));
    send(&mut state, Message::FormEmailChanged("edsger@example.com".into()));
    send(&mut state, Message::FormRoleSelected(Role::Admin));
    send(&mut state, Message::SubmitAdd);

    let domain = &state.domains.user_management.state;
    assert!(!domain.show_add_modal);
    assert_eq!(domain.users.len(), 4);

    let added = domain.users.last().expect("added user");
    assert_eq!(added.id, UserId(4));
    assert_eq!(added.name.as_deref(), Some("Edsger"));
    assert_eq!(added.role, Some(Role::Admin));
    assert_eq!(added.status, Some(UserStatus::Active));
    assert_eq!(added.last_login, None);
    assert!(domain.form.name.is_empty());
}

#[test]
fn add_after_delete_under_list_length_policy_duplicates_id() {
    let mut state = loaded_state(three_users());
    state.domains.user_management.state.id_policy = IdPolicy::ListLength;

    send(&mut state, Message::RequestDelete(UserId(2)));
    send(&mut state, Message::ConfirmDelete);
    send(&mut state, Message::OpenAddModal);
    send(&mut state, Message::SubmitAdd);

    assert_eq!(ids(&state), vec![1, 3, 3]);
}

#[test]
fn add_after_delete_under_default_policy_stays_unique() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::RequestDelete(UserId(2)));
    send(&mut state, Message::ConfirmDelete);
    send(&mut state, Message::OpenAddModal);
    send(&mut state, Message::SubmitAdd);

    assert_eq!(ids(&state), vec![1, 3, 4]);
}

#[test]
fn edit_replaces_in_place_and_keeps_last_login() {
    let mut users = three_users();
    users[1].last_login = chrono::DateTime::from_timestamp(1_700_000_000, 0);
    let mut state = loaded_state(users);

    send(&mut state, Message::EditUser(UserId(2)));
    {
        let domain = &state.domains.user_management.state;
        assert!(domain.show_edit_modal);
        assert_eq!(domain.form.name, "Grace");
        assert_eq!(domain.selected_user.as_ref().map(|u| u.id), Some(UserId(2)));
    }

    send(&mut state, Message::FormNameChanged("Grace Hopper".into()));
    send(&mut state, Message::FormStatusSelected(UserStatus::Active));
    send(&mut state, Message::SubmitEdit);

    let domain = &state.domains.user_management.state;
    assert!(!domain.show_edit_modal);
    assert!(domain.selected_user.is_none());
    assert_eq!(ids(&state), vec![1, 2, 3]);

    let edited = &domain.users[1];
    assert_eq!(edited.name.as_deref(), Some("Grace Hopper"));
    assert_eq!(edited.status, Some(UserStatus::Active));
    assert_eq!(
        edited.last_login,
        chrono::DateTime::from_timestamp(1_700_000_000, 0)
    );
}

#[test]
fn edit_of_record_removed_meanwhile_does_not_insert() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::EditUser(UserId(3)));
    state
        .domains
        .user_management
        .state
        .users
        .retain(|user| user.id != UserId(3));
    send(&mut state, Message::SubmitEdit);

    assert_eq!(ids(&state), vec![1, 2]);
    assert!(!state.domains.user_management.state.show_edit_modal);
}

#[test]
fn edit_unknown_id_is_ignored() {
    let mut state = loaded_state(three_users());
    send(&mut state, Message::EditUser(UserId(42)));

    let domain = &state.domains.user_management.state;
    assert!(!domain.show_edit_modal);
    assert!(domain.selected_user.is_none());
}

#[test]
fn confirmed_delete_removes_from_every_view() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::RequestDelete(UserId(1)));
    assert_eq!(
        state.domains.user_management.state.pending_delete,
        Some(UserId(1))
    );
    assert_eq!(ids(&state), vec![1, 2, 3]);

    send(&mut state, Message::ConfirmDelete);

    let domain = &state.domains.user_management.state;
    assert_eq!(domain.pending_delete, None);
    assert_eq!(ids(&state), vec![2, 3]);

    for role in RoleFilter::ALL {
        send(&mut state, Message::RoleFilterSelected(role));
        assert!(
            state
                .domains
                .user_management
                .state
                .filtered_users()
                .iter()
                .all(|user| user.id != UserId(1))
        );
    }
}

#[test]
fn cancelled_delete_keeps_list() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::RequestDelete(UserId(2)));
    send(&mut state, Message::CancelDelete);

    assert_eq!(state.domains.user_management.state.pending_delete, None);
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::RequestDelete(UserId(77)));
    send(&mut state, Message::ConfirmDelete);

    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn escape_dismisses_topmost_overlay_first() {
    let mut state = loaded_state(three_users());

    send(&mut state, Message::EditUser(UserId(1)));
    send(&mut state, Message::RequestDelete(UserId(1)));

    send(&mut state, Message::DismissOverlay);
    {
        let domain = &state.domains.user_management.state;
        assert_eq!(domain.pending_delete, None);
        assert!(domain.show_edit_modal);
    }

    send(&mut state, Message::DismissOverlay);
    let domain = &state.domains.user_management.state;
    assert!(!domain.show_edit_modal);
    assert!(!domain.has_overlay());
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn view_toggles_are_independent() {
    let mut state = State::default();
    assert!(state.domains.ui.state.sidebar_open);
    assert!(!state.domains.ui.state.dark_mode);

    send(&mut state, UiMessage::ToggleSidebar);
    assert!(!state.domains.ui.state.sidebar_open);
    assert!(!state.domains.ui.state.dark_mode);

    send(&mut state, UiMessage::ToggleDarkMode);
    assert!(!state.domains.ui.state.sidebar_open);
    assert!(state.domains.ui.state.dark_mode);

    send(&mut state, Message::OpenAddModal);
    assert!(state.domains.user_management.state.show_add_modal);
    assert!(state.domains.ui.state.dark_mode);

    send(&mut state, Message::CancelAdd);
    assert!(!state.domains.user_management.state.show_add_modal);
    assert!(!state.domains.ui.state.sidebar_open);
}
