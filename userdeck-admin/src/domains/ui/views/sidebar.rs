use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::common::icons::{Icon, IconSize, icon, labeled};
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::{Section, UiState, theme};

const EXPANDED_WIDTH: f32 = 220.0;
const COLLAPSED_WIDTH: f32 = 64.0;

pub fn view_sidebar(ui: &UiState) -> Element<'_, DomainMessage> {
    let toggle = button(icon(Icon::Menu, IconSize::Toolbar))
        .style(theme::Button::Icon.style())
        .padding(8)
        .on_press(DomainMessage::from(UiMessage::ToggleSidebar));

    let title: Element<'_, DomainMessage> = if ui.sidebar_open {
        row![text("Userdeck").size(18), Space::new().width(Length::Fill), toggle]
            .align_y(Alignment::Center)
            .into()
    } else {
        toggle.into()
    };

    let mut nav = column![].spacing(4);
    for section in Section::ALL {
        nav = nav.push(nav_item(section, ui));
    }

    let width = if ui.sidebar_open {
        EXPANDED_WIDTH
    } else {
        COLLAPSED_WIDTH
    };

    container(column![title, nav].spacing(16))
        .style(theme::Container::Sidebar.style())
        .padding(12)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .into()
}

fn nav_item(section: Section, ui: &UiState) -> Element<'_, DomainMessage> {
    let style = if section == ui.section {
        theme::Button::NavItemActive
    } else {
        theme::Button::NavItem
    };

    // Labels are hidden while collapsed; the icon alone stays clickable.
    let content: Element<'_, DomainMessage> = if ui.sidebar_open {
        labeled(section.icon(), section.label()).spacing(10).into()
    } else {
        icon(section.icon(), IconSize::Toolbar).into()
    };

    button(content)
        .style(style.style())
        .padding([8, 12])
        .width(Length::Fill)
        .on_press(DomainMessage::from(UiMessage::SelectSection(section)))
        .into()
}
