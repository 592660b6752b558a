use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::common::icons::{Icon, IconSize, icon, labeled};
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::{Section, theme};
use crate::domains::user_management::messages::Message as UserManagementMessage;
use crate::state::State;

pub fn view_header(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;

    let title = match ui.section {
        Section::Users => "User Management",
        other => other.label(),
    };

    let theme_icon = if ui.dark_mode { Icon::Sun } else { Icon::Moon };
    let theme_toggle = button(icon(theme_icon, IconSize::Toolbar))
        .style(theme::Button::Icon.style())
        .padding(8)
        .on_press(DomainMessage::from(UiMessage::ToggleDarkMode));

    let mut actions = row![theme_toggle].spacing(10).align_y(Alignment::Center);

    if ui.section == Section::Users {
        let domain = &state.domains.user_management.state;

        let refresh = button(labeled(Icon::RefreshCw, "Refresh"))
        .style(theme::Button::Secondary.style())
        .padding([8, 14])
        .on_press_maybe(
            (!domain.is_loading())
                .then(|| DomainMessage::from(UserManagementMessage::Refresh)),
        );

        let add_user = button(labeled(Icon::UserPlus, "Add User"))
        .style(theme::Button::Primary.style())
        .padding([8, 14])
        .on_press(DomainMessage::from(UserManagementMessage::OpenAddModal));

        actions = actions.push(refresh).push(add_user);
    }

    container(
        row![text(title).size(22), Space::new().width(Length::Fill), actions]
            .align_y(Alignment::Center),
    )
    .style(theme::Container::Header.style())
    .padding([14, 24])
    .width(Length::Fill)
    .into()
}
