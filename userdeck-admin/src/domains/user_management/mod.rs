//! User management domain
//!
//! Holds the users table: the loaded list, filter criteria, modal flags and
//! the load lifecycle for the read endpoint.

pub mod filter;
pub mod form;
pub mod messages;
pub mod records;
pub mod update;

use std::sync::Arc;
use userdeck_model::{User, UserId};

use self::filter::UserFilter;
use self::form::UserForm;
use self::records::IdPolicy;
use crate::infra::services::UserAdminService;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsersLoadState {
    #[default]
    NotStarted,
    InProgress,
    Succeeded,
    Failed {
        last_error: String,
    },
}

/// User management domain state
pub struct UserManagementDomainState {
    pub users: Vec<User>,
    pub selected_user: Option<User>,
    pub filter: UserFilter,
    pub show_add_modal: bool,
    pub show_edit_modal: bool,
    pub form: UserForm,
    pub pending_delete: Option<UserId>,
    pub load_state: UsersLoadState,
    /// Bumped for every issued read. Results tagged with an older value are
    /// dropped.
    pub generation: u64,
    /// False while the users panel is not on screen.
    pub active: bool,
    /// Set by the first activation. Later activations keep the list.
    pub mounted: bool,
    pub id_policy: IdPolicy,
    pub user_admin_service: Option<Arc<dyn UserAdminService>>,
}

impl Default for UserManagementDomainState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            selected_user: None,
            filter: UserFilter::default(),
            show_add_modal: false,
            show_edit_modal: false,
            form: UserForm::for_new_user(),
            pending_delete: None,
            load_state: UsersLoadState::NotStarted,
            generation: 0,
            active: false,
            mounted: false,
            id_policy: IdPolicy::default(),
            user_admin_service: None,
        }
    }
}

impl std::fmt::Debug for UserManagementDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementDomainState")
            .field("users", &self.users.len())
            .field("selected_user", &self.selected_user.as_ref().map(|u| u.id))
            .field("filter", &self.filter)
            .field("show_add_modal", &self.show_add_modal)
            .field("show_edit_modal", &self.show_edit_modal)
            .field("pending_delete", &self.pending_delete)
            .field("load_state", &self.load_state)
            .field("generation", &self.generation)
            .field("active", &self.active)
            .field("mounted", &self.mounted)
            .field("id_policy", &self.id_policy)
            .field(
                "has_user_admin_service",
                &self.user_admin_service.is_some(),
            )
            .finish()
    }
}

impl UserManagementDomainState {
    /// Rows currently visible in the table, recomputed on every call.
    pub fn filtered_users(&self) -> Vec<&User> {
        self.filter.apply(&self.users)
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn pending_delete_user(&self) -> Option<&User> {
        self.pending_delete.and_then(|id| self.find_user(id))
    }

    /// Back to a blank panel. Service, id policy and generation survive.
    pub fn reset_view(&mut self) {
        self.users.clear();
        self.selected_user = None;
        self.filter = UserFilter::default();
        self.show_add_modal = false;
        self.show_edit_modal = false;
        self.form = UserForm::for_new_user();
        self.pending_delete = None;
        self.load_state = UsersLoadState::NotStarted;
    }

    /// Start a new read and return the generation it is tagged with.
    pub fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.load_state = UsersLoadState::InProgress;
        self.generation
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        if self.load_state == UsersLoadState::InProgress {
            self.load_state = UsersLoadState::NotStarted;
        }
    }

    /// Whether a result tagged with `generation` may still be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        self.active && generation == self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == UsersLoadState::InProgress
    }

    pub fn has_overlay(&self) -> bool {
        self.show_add_modal || self.show_edit_modal || self.pending_delete.is_some()
    }
}

#[derive(Debug, Default)]
pub struct UserManagementDomain {
    pub state: UserManagementDomainState,
}
