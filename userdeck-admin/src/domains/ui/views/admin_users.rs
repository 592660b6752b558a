use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};
use userdeck_model::{Role, User, UserStatus, format_last_login};

use crate::common::messages::DomainMessage;
use crate::common::icons::{Icon, IconSize, icon};
use crate::domains::ui::theme;
use crate::domains::user_management::UserManagementDomainState;
use crate::domains::user_management::filter::{RoleFilter, StatusFilter};
use crate::domains::user_management::messages::Message as UserManagementMessage;
use crate::state::State;

const ACTIONS_WIDTH: f32 = 96.0;

pub fn view_admin_users(state: &State) -> Element<'_, DomainMessage> {
    let domain = &state.domains.user_management.state;

    let body: Element<'_, DomainMessage> =
        if domain.is_loading() && domain.users.is_empty() {
            container(text("Loading users…").size(16))
                .padding(40)
                .center_x(Length::Fill)
                .into()
        } else {
            users_table(domain)
        };

    column![filter_bar(domain), body]
        .spacing(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn filter_bar(
    domain: &UserManagementDomainState,
) -> Element<'_, DomainMessage> {
    let search = text_input("Search users...", &domain.filter.search)
        .on_input(|value| {
            DomainMessage::from(UserManagementMessage::SearchChanged(value))
        })
        .padding(8)
        .width(Length::Fill);

    let role = pick_list(RoleFilter::ALL.to_vec(), Some(domain.filter.role), |role| {
        DomainMessage::from(UserManagementMessage::RoleFilterSelected(role))
    })
    .width(Length::Fixed(150.0));

    let status = pick_list(
        StatusFilter::ALL.to_vec(),
        Some(domain.filter.status),
        |status| {
            DomainMessage::from(UserManagementMessage::StatusFilterSelected(
                status,
            ))
        },
    )
    .width(Length::Fixed(150.0));

    let clear = button(text("Clear"))
        .style(theme::Button::Secondary.style())
        .padding([8, 12])
        .on_press_maybe(
            (!domain.filter.is_default())
                .then(|| DomainMessage::from(UserManagementMessage::ClearFilters)),
        );

    container(
        row![icon(Icon::Search, IconSize::Toolbar), search, role, status, clear]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .style(theme::Container::Card.style())
    .padding(12)
    .width(Length::Fill)
    .into()
}

fn users_table(
    domain: &UserManagementDomainState,
) -> Element<'_, DomainMessage> {
    let header = container(
        row![
            text("User").size(13).width(Length::FillPortion(3)),
            text("Role").size(13).width(Length::FillPortion(1)),
            text("Status").size(13).width(Length::FillPortion(1)),
            text("Last Login").size(13).width(Length::FillPortion(2)),
            text("Actions").size(13).width(Length::Fixed(ACTIONS_WIDTH)),
        ]
        .spacing(12),
    )
    .style(theme::Container::TableHeader.style())
    .padding([10, 16])
    .width(Length::Fill);

    let visible = domain.filtered_users();

    let mut rows = column![].width(Length::Fill);
    if visible.is_empty() {
        let message = if domain.users.is_empty() {
            "No users to show"
        } else {
            "No users match the current filters"
        };
        rows = rows.push(
            container(text(message).size(14))
                .padding(24)
                .center_x(Length::Fill),
        );
    } else {
        for user in visible {
            rows = rows.push(user_row(user));
        }
    }

    container(column![header, scrollable(rows).height(Length::Fill)])
        .style(theme::Container::Card.style())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn user_row(user: &User) -> Element<'_, DomainMessage> {
    let identity = column![
        text(user.display_name()).size(15),
        text(user.display_email()).size(13),
    ]
    .spacing(2)
    .width(Length::FillPortion(3));

    let role = match user.effective_role() {
        Role::Admin => tag(Role::Admin.label(), theme::Container::TagAdmin),
        Role::User => tag(Role::User.label(), theme::Container::TagUser),
    };

    let status: Element<'_, DomainMessage> = match user.status {
        Some(UserStatus::Active) => {
            tag(UserStatus::Active.label(), theme::Container::TagActive)
        }
        Some(UserStatus::Inactive) => {
            tag(UserStatus::Inactive.label(), theme::Container::TagInactive)
        }
        None => Space::new().into(),
    };

    let last_login = user
        .last_login
        .as_ref()
        .map(format_last_login)
        .unwrap_or_default();

    let actions = row![
        button(icon(Icon::Pencil, IconSize::Row))
            .style(theme::Button::Icon.style())
            .padding(6)
            .on_press(DomainMessage::from(UserManagementMessage::EditUser(
                user.id
            ))),
        button(icon(Icon::Trash2, IconSize::Row))
            .style(theme::Button::Icon.style())
            .padding(6)
            .on_press(DomainMessage::from(
                UserManagementMessage::RequestDelete(user.id)
            )),
    ]
    .spacing(4)
    .width(Length::Fixed(ACTIONS_WIDTH));

    container(
        row![
            identity,
            container(role).width(Length::FillPortion(1)),
            container(status).width(Length::FillPortion(1)),
            text(last_login).size(14).width(Length::FillPortion(2)),
            actions,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .style(theme::Container::TableRow.style())
    .padding([10, 16])
    .width(Length::Fill)
    .into()
}

fn tag(
    label: &'static str,
    style: theme::Container,
) -> Element<'static, DomainMessage> {
    container(text(label).size(12))
        .style(style.style())
        .padding([2, 10])
        .into()
}
