//! Domain modules for the dashboard
//!
//! Each domain owns its slice of state, its message type and an update
//! handler. Cross-domain reactions go through
//! [`crate::common::messages::CrossDomainEvent`].

pub mod ui;
pub mod user_management;

/// Domain registry that manages all domain states
#[derive(Debug, Default)]
pub struct DomainRegistry {
    pub ui: ui::UiDomain,
    pub user_management: user_management::UserManagementDomain,
}
