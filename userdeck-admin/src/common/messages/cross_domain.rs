//! Cross-domain event coordination module
//!
//! Events raised by one domain that another domain has to react to. Keeps the
//! UI domain from reaching into user management state directly.

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::user_management::{
    messages::Message as UserManagementMessage, update::update_user_management,
};
use crate::state::State;

pub fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    log::debug!("[CrossDomain] Processing event: {:?}", event);

    let message = match event {
        CrossDomainEvent::UsersPanelShown => UserManagementMessage::Activate,
        CrossDomainEvent::UsersPanelHidden => UserManagementMessage::Deactivate,
    };

    // Applied in place so the panel state is settled before the next message.
    let result = update_user_management(state, message);
    let follow_ups = result
        .events
        .into_iter()
        .map(|event| handle_event(state, event));
    Task::batch(std::iter::once(result.task).chain(follow_ups).collect::<Vec<_>>())
}
