use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use userdeck_model::{Role, UserStatus};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;
use crate::domains::user_management::UserManagementDomainState;
use crate::domains::user_management::messages::Message as UserManagementMessage;

/// Which modal the shared form is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

pub fn view_user_form(
    domain: &UserManagementDomainState,
    mode: FormMode,
) -> Element<'_, DomainMessage> {
    let form = &domain.form;

    let (title, submit_label, submit, cancel) = match mode {
        FormMode::Add => (
            "Add New User",
            "Add User",
            UserManagementMessage::SubmitAdd,
            UserManagementMessage::CancelAdd,
        ),
        FormMode::Edit => (
            "Edit User",
            "Save Changes",
            UserManagementMessage::SubmitEdit,
            UserManagementMessage::CancelEdit,
        ),
    };

    let name = text_input("Full name", &form.name)
        .on_input(|value| {
            DomainMessage::from(UserManagementMessage::FormNameChanged(value))
        })
        .padding(8);

    let email = text_input("name@example.com", &form.email)
        .on_input(|value| {
            DomainMessage::from(UserManagementMessage::FormEmailChanged(value))
        })
        .on_submit(DomainMessage::from(submit.clone()))
        .padding(8);

    let role = pick_list(Role::ALL.to_vec(), form.role, |role| {
        DomainMessage::from(UserManagementMessage::FormRoleSelected(role))
    })
    .placeholder("Role")
    .width(Length::Fill);

    let status = pick_list(UserStatus::ALL.to_vec(), form.status, |status| {
        DomainMessage::from(UserManagementMessage::FormStatusSelected(status))
    })
    .placeholder("Status")
    .width(Length::Fill);

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel"))
            .style(theme::Button::Secondary.style())
            .padding([8, 14])
            .on_press(DomainMessage::from(cancel)),
        button(text(submit_label))
            .style(theme::Button::Primary.style())
            .padding([8, 14])
            .on_press(DomainMessage::from(submit)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(
        column![
            text(title).size(20),
            labeled("Name", name),
            labeled("Email", email),
            row![labeled("Role", role), labeled("Status", status)].spacing(12),
            buttons,
        ]
        .spacing(14),
    )
    .style(theme::Container::Modal.style())
    .padding(24)
    .width(Length::Fixed(440.0))
    .into()
}

fn labeled<'a>(
    label: &'static str,
    field: impl Into<Element<'a, DomainMessage>>,
) -> Element<'a, DomainMessage> {
    column![text(label).size(13), field.into()]
        .spacing(4)
        .width(Length::Fill)
        .into()
}
