use iced::Task;
use log::debug;

use crate::common::messages::{DomainMessage, DomainUpdateResult, cross_domain};
use crate::domains::{ui, user_management};
use crate::state::State;

/// Root update: route to the owning domain, then fan out any events it raised.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    debug!("Update: {}", message.name());

    let result = match message {
        DomainMessage::Ui(msg) => ui::update::update_ui(state, msg),
        DomainMessage::UserManagement(msg) => {
            user_management::update::update_user_management(state, msg)
        }
        DomainMessage::Event(event) => {
            return cross_domain::handle_event(state, event);
        }
    };

    let DomainUpdateResult { task, events } = result;
    if events.is_empty() {
        return task;
    }

    let mut tasks = vec![task];
    for event in events {
        tasks.push(cross_domain::handle_event(state, event));
    }
    Task::batch(tasks)
}
