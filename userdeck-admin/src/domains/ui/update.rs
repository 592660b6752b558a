use iced::Task;
use log::{debug, info};

use super::Section;
use super::messages::Message;
use crate::common::messages::{CrossDomainEvent, DomainUpdateResult};
use crate::state::State;

/// Handle shell messages. Toggles are independent of each other.
pub fn update_ui(state: &mut State, message: Message) -> DomainUpdateResult {
    debug!("UI update: {}", message.name());

    let ui = &mut state.domains.ui.state;

    match message {
        Message::ToggleSidebar => {
            ui.sidebar_open = !ui.sidebar_open;
            DomainUpdateResult::none()
        }
        Message::ToggleDarkMode => {
            ui.dark_mode = !ui.dark_mode;
            DomainUpdateResult::none()
        }
        Message::SelectSection(section) => {
            let previous = ui.section;
            if previous == section {
                return DomainUpdateResult::none();
            }

            info!("Navigating from {:?} to {:?}", previous, section);
            ui.section = section;

            let mut result = DomainUpdateResult::task(Task::none());
            if previous == Section::Users {
                result = result.add_event(CrossDomainEvent::UsersPanelHidden);
            }
            if section == Section::Users {
                result = result.add_event(CrossDomainEvent::UsersPanelShown);
            }
            result
        }
    }
}
