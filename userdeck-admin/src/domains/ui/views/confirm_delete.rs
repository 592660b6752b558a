use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use userdeck_model::User;

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;
use crate::domains::user_management::messages::Message as UserManagementMessage;

pub fn view_confirm_delete(user: Option<&User>) -> Element<'_, DomainMessage> {
    let prompt = match user.and_then(|user| user.name.as_deref()) {
        Some(name) => format!("Are you sure you want to delete {name}?"),
        None => "Are you sure you want to delete this user?".to_string(),
    };

    container(
        column![
            text("Delete user").size(20),
            text(prompt).size(15),
            text("This only removes the user from this view.").size(13),
            row![
                Space::new().width(Length::Fill),
                button(text("Cancel"))
                    .style(theme::Button::Secondary.style())
                    .padding([8, 14])
                    .on_press(DomainMessage::from(
                        UserManagementMessage::CancelDelete
                    )),
                button(text("Delete"))
                    .style(theme::Button::Danger.style())
                    .padding([8, 14])
                    .on_press(DomainMessage::from(
                        UserManagementMessage::ConfirmDelete
                    )),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        ]
        .spacing(14),
    )
    .style(theme::Container::Modal.style())
    .padding(24)
    .width(Length::Fixed(400.0))
    .into()
}
