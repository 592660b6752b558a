use iced::widget::{column, container, row};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::views::{
    admin_users::view_admin_users,
    confirm_delete::view_confirm_delete,
    dashboard::view_dashboard,
    header::view_header,
    modal::modal,
    settings::view_settings,
    sidebar::view_sidebar,
    user_form::{FormMode, view_user_form},
};
use crate::domains::ui::{Section, theme};
use crate::domains::user_management::messages::Message as UserManagementMessage;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;

    let content = match ui.section {
        Section::Dashboard => view_dashboard(state),
        Section::Users => view_admin_users(state),
        Section::Settings => view_settings(state),
    };

    let main = column![
        view_header(state),
        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill),
    ];

    let shell = container(row![view_sidebar(ui), main])
        .style(theme::Container::Page.style())
        .width(Length::Fill)
        .height(Length::Fill);

    if ui.section == Section::Users {
        with_overlays(state, shell.into())
    } else {
        shell.into()
    }
}

/// Modals stack in order: add or edit form, then the delete confirmation.
fn with_overlays<'a>(
    state: &'a State,
    base: Element<'a, DomainMessage>,
) -> Element<'a, DomainMessage> {
    let domain = &state.domains.user_management.state;

    let base = if domain.show_edit_modal {
        modal(
            base,
            view_user_form(domain, FormMode::Edit),
            DomainMessage::from(UserManagementMessage::CancelEdit),
        )
    } else if domain.show_add_modal {
        modal(
            base,
            view_user_form(domain, FormMode::Add),
            DomainMessage::from(UserManagementMessage::CancelAdd),
        )
    } else {
        base
    };

    if domain.pending_delete.is_some() {
        modal(
            base,
            view_confirm_delete(domain.pending_delete_user()),
            DomainMessage::from(UserManagementMessage::CancelDelete),
        )
    } else {
        base
    }
}
