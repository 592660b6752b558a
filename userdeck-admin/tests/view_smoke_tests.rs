//! View construction smoke tests
//!
//! Build the root element for each section and overlay combination. If this
//! runs without panicking the widget tree was assembled successfully.

use chrono::{TimeZone, Utc};
use iced::Element;
use userdeck_admin::app::app_theme;
use userdeck_admin::common::messages::DomainMessage;
use userdeck_admin::domains::ui::Section;
use userdeck_admin::domains::user_management::UsersLoadState;
use userdeck_admin::state::State;
use userdeck_admin::view::view;
use userdeck_model::{Role, User, UserId, UserStatus};

fn populated_state() -> State {
    let mut state = State::default();
    let domain = &mut state.domains.user_management.state;
    domain.active = true;
    domain.load_state = UsersLoadState::Succeeded;
    domain.users = vec![
        User {
            id: UserId(1),
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            role: Some(Role::Admin),
            status: Some(UserStatus::Active),
            last_login: Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).single(),
        },
        User {
            id: UserId(2),
            name: None,
            email: None,
            role: None,
            status: None,
            last_login: None,
        },
    ];
    state
}

fn build(state: &State) {
    let element: Element<DomainMessage> = view(state);
    drop(element);
}

#[test]
fn every_section_renders() {
    let mut state = populated_state();
    for section in Section::ALL {
        state.domains.ui.state.section = section;
        build(&state);
    }
}

#[test]
fn collapsed_sidebar_and_dark_mode_render() {
    let mut state = populated_state();
    state.domains.ui.state.sidebar_open = false;
    state.domains.ui.state.dark_mode = true;
    build(&state);

    let theme = app_theme(&state);
    assert_eq!(
        theme.palette().background,
        userdeck_admin::domains::ui::theme::DashboardTheme::DARK_BACKGROUND
    );
}

#[test]
fn overlays_render() {
    let mut state = populated_state();

    state.domains.user_management.state.show_add_modal = true;
    build(&state);

    state.domains.user_management.state.show_add_modal = false;
    state.domains.user_management.state.show_edit_modal = true;
    build(&state);

    state.domains.user_management.state.pending_delete = Some(UserId(1));
    build(&state);

    // Pending id that no longer matches a row still renders a prompt.
    state.domains.user_management.state.pending_delete = Some(UserId(99));
    build(&state);
}

#[test]
fn loading_and_empty_states_render() {
    let mut state = State::default();
    state.domains.user_management.state.load_state = UsersLoadState::InProgress;
    build(&state);

    state.domains.user_management.state.load_state = UsersLoadState::Failed {
        last_error: "offline".into(),
    };
    build(&state);

    let mut state = populated_state();
    state.domains.user_management.state.filter.search = "nobody".into();
    build(&state);
}
