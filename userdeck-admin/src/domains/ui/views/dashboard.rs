use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::common::icons::{Icon, IconSize, icon};
use crate::domains::ui::theme;
use crate::state::State;

/// Headline counts over the current in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSummary {
    pub total: usize,
    pub admins: usize,
    pub active: usize,
}

impl UserSummary {
    pub fn from_users(users: &[userdeck_model::User]) -> Self {
        Self {
            total: users.len(),
            admins: users.iter().filter(|user| user.is_admin()).count(),
            active: users.iter().filter(|user| user.is_active()).count(),
        }
    }
}

pub fn view_dashboard(state: &State) -> Element<'_, DomainMessage> {
    let summary =
        UserSummary::from_users(&state.domains.user_management.state.users);

    column![
        text("Overview").size(18),
        row![
            stat_card(Icon::Users, "Total users", summary.total),
            stat_card(Icon::Shield, "Admins", summary.admins),
            stat_card(Icon::Check, "Active", summary.active),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .into()
}

fn stat_card(
    glyph: Icon,
    label: &'static str,
    value: usize,
) -> Element<'static, DomainMessage> {
    container(
        column![
            icon(glyph, IconSize::Stat),
            text(value.to_string()).size(28),
            text(label).size(14),
        ]
        .spacing(6),
    )
    .style(theme::Container::Card.style())
    .padding(20)
    .width(Length::Fill)
    .into()
}
