pub mod cross_domain;

use iced::Task;

use crate::domains::ui;
use crate::domains::user_management;

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl DomainUpdateResult {
    /// Nothing to run, nothing to broadcast
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Add an event to this result
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Shell, theme and navigation
    Ui(ui::messages::Message),

    /// User management domain
    UserManagement(user_management::messages::Message),

    Event(CrossDomainEvent),
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl From<user_management::messages::Message> for DomainMessage {
    fn from(msg: user_management::messages::Message) -> Self {
        DomainMessage::UserManagement(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ui(msg) => msg.name(),
            Self::UserManagement(msg) => msg.name(),
            Self::Event(_) => "DomainMessage::Event",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({:?})", msg),
            Self::UserManagement(msg) => {
                write!(f, "DomainMessage::UserManagement({:?})", msg)
            }
            Self::Event(event) => write!(f, "DomainMessage::Event({:?})", event),
        }
    }
}

/// Cross-domain event bus for coordination
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// The users table came on screen
    UsersPanelShown,
    /// The users table left the screen
    UsersPanelHidden,
}
