use iced::widget::{column, container, text, toggler};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme;
use crate::state::State;

pub fn view_settings(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;

    let appearance = column![
        text("Appearance").size(18),
        toggler(ui.dark_mode)
            .label("Dark mode")
            .on_toggle(|_| DomainMessage::from(UiMessage::ToggleDarkMode)),
        toggler(ui.sidebar_open)
            .label("Expanded sidebar")
            .on_toggle(|_| DomainMessage::from(UiMessage::ToggleSidebar)),
    ]
    .spacing(12);

    let connection = column![
        text("Server").size(18),
        text(format!("Users endpoint: {}", state.users_endpoint())).size(14),
    ]
    .spacing(8);

    container(column![appearance, connection].spacing(24))
        .style(theme::Container::Card.style())
        .padding(20)
        .width(Length::Fill)
        .into()
}
