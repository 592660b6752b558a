use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, Modifiers, key::Named};

use crate::common::messages::DomainMessage;
use crate::domains::user_management::messages::Message as UserManagementMessage;
use crate::state::State;

pub fn subscription(_state: &State) -> Subscription<DomainMessage> {
    event::listen_with(overlay_key_handler)
}

/// Escape closes the topmost overlay, even while a form field has focus.
fn overlay_key_handler(
    event: RuntimeEvent,
    _status: EventStatus,
    _window: iced::window::Id,
) -> Option<DomainMessage> {
    match event {
        RuntimeEvent::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            overlay_key_message(&key, modifiers)
        }
        _ => None,
    }
}

fn overlay_key_message(key: &Key, modifiers: Modifiers) -> Option<DomainMessage> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Escape) => {
            Some(DomainMessage::from(UserManagementMessage::DismissOverlay))
        }
        _ => None,
    }
}
