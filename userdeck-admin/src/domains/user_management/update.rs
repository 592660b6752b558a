use std::sync::Arc;

use iced::Task;
use log::{debug, error, info, warn};

use super::form::UserForm;
use super::messages::Message;
use super::records::{append_user, remove_user, replace_user};
use super::{UserManagementDomainState, UsersLoadState};
use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::infra::services::UserAdminService;
use crate::state::State;

/// Handle user management domain messages
pub fn update_user_management(
    state: &mut State,
    message: Message,
) -> DomainUpdateResult {
    debug!("User management update: {}", message.name());

    let domain = &mut state.domains.user_management.state;

    match message {
        Message::Activate => {
            if !domain.mounted {
                domain.reset_view();
                domain.mounted = true;
            }
            domain.active = true;
            DomainUpdateResult::task(start_load(domain))
        }

        Message::Deactivate => {
            if domain.active {
                info!(
                    "Users panel deactivated; results for generation {} will be dropped",
                    domain.generation
                );
            }
            domain.deactivate();
            DomainUpdateResult::none()
        }

        Message::Refresh => {
            if !domain.active {
                debug!("Ignoring refresh while the users panel is inactive");
                return DomainUpdateResult::none();
            }
            DomainUpdateResult::task(start_load(domain))
        }

        Message::UsersLoaded { generation, result } => {
            if !domain.accepts(generation) {
                debug!(
                    "Discarding user list for generation {} (current {}, active {})",
                    generation, domain.generation, domain.active
                );
                return DomainUpdateResult::none();
            }

            match result {
                Ok(users) => {
                    info!("Successfully loaded {} users", users.len());
                    domain.users = users;
                    domain.load_state = UsersLoadState::Succeeded;
                }
                Err(err) => {
                    error!("Failed to load users: {}", err);
                    domain.load_state = UsersLoadState::Failed {
                        last_error: err.to_string(),
                    };
                }
            }
            DomainUpdateResult::none()
        }

        // Filters
        Message::SearchChanged(search) => {
            domain.filter.search = search;
            DomainUpdateResult::none()
        }
        Message::RoleFilterSelected(role) => {
            domain.filter.role = role;
            DomainUpdateResult::none()
        }
        Message::StatusFilterSelected(status) => {
            domain.filter.status = status;
            DomainUpdateResult::none()
        }
        Message::ClearFilters => {
            domain.filter = Default::default();
            DomainUpdateResult::none()
        }

        // Form fields
        Message::FormNameChanged(name) => {
            domain.form.name = name;
            DomainUpdateResult::none()
        }
        Message::FormEmailChanged(email) => {
            domain.form.email = email;
            DomainUpdateResult::none()
        }
        Message::FormRoleSelected(role) => {
            domain.form.role = Some(role);
            DomainUpdateResult::none()
        }
        Message::FormStatusSelected(status) => {
            domain.form.status = Some(status);
            DomainUpdateResult::none()
        }

        // User creation
        Message::OpenAddModal => {
            domain.form = UserForm::for_new_user();
            domain.selected_user = None;
            domain.show_edit_modal = false;
            domain.show_add_modal = true;
            DomainUpdateResult::none()
        }
        Message::SubmitAdd => {
            if !domain.show_add_modal {
                warn!("Add submitted without an open add form");
                return DomainUpdateResult::none();
            }
            let new_user = domain.form.to_new_user();
            let id = append_user(&mut domain.users, new_user, domain.id_policy);
            info!("Added user {} locally ({:?})", id, domain.id_policy);
            close_add(domain);
            DomainUpdateResult::none()
        }
        Message::CancelAdd => {
            close_add(domain);
            DomainUpdateResult::none()
        }

        // User updates
        Message::EditUser(id) => {
            let Some(user) = domain.find_user(id).cloned() else {
                debug!("Edit requested for unknown user {}", id);
                return DomainUpdateResult::none();
            };
            domain.form = UserForm::from_user(&user);
            domain.selected_user = Some(user);
            domain.show_add_modal = false;
            domain.show_edit_modal = true;
            DomainUpdateResult::none()
        }
        Message::SubmitEdit => {
            if let Some(selected) = domain.selected_user.take() {
                let edited = domain.form.apply_to(&selected);
                if replace_user(&mut domain.users, edited) {
                    info!("Updated user {} locally", selected.id);
                } else {
                    debug!(
                        "User {} is no longer in the list; edit dropped",
                        selected.id
                    );
                }
            } else {
                warn!("Edit submitted without a selected user");
            }
            close_edit(domain);
            DomainUpdateResult::none()
        }
        Message::CancelEdit => {
            close_edit(domain);
            DomainUpdateResult::none()
        }

        // User deletion
        Message::RequestDelete(id) => {
            domain.pending_delete = Some(id);
            DomainUpdateResult::none()
        }
        Message::ConfirmDelete => {
            if let Some(id) = domain.pending_delete.take() {
                match remove_user(&mut domain.users, id) {
                    0 => debug!("Delete confirmed for unknown user {}", id),
                    removed => info!("Removed user {} locally ({} record(s))", id, removed),
                }
            }
            DomainUpdateResult::none()
        }
        Message::CancelDelete => {
            domain.pending_delete = None;
            DomainUpdateResult::none()
        }

        Message::DismissOverlay => {
            if domain.pending_delete.is_some() {
                domain.pending_delete = None;
            } else if domain.show_edit_modal {
                close_edit(domain);
            } else if domain.show_add_modal {
                close_add(domain);
            }
            DomainUpdateResult::none()
        }
    }
}

fn start_load(domain: &mut UserManagementDomainState) -> Task<DomainMessage> {
    let Some(service) = domain.user_admin_service.clone() else {
        error!("No UserAdminService available");
        domain.load_state = UsersLoadState::Failed {
            last_error: "no user service configured".to_string(),
        };
        return Task::none();
    };

    let generation = domain.begin_load();
    info!("Loading users from server (generation {})", generation);
    fetch_users(service, generation)
}

fn fetch_users(
    service: Arc<dyn UserAdminService>,
    generation: u64,
) -> Task<DomainMessage> {
    Task::perform(
        async move { service.list_users().await.map_err(Arc::new) },
        move |result| {
            DomainMessage::from(Message::UsersLoaded { generation, result })
        },
    )
}

fn close_add(domain: &mut UserManagementDomainState) {
    domain.show_add_modal = false;
    domain.form = UserForm::for_new_user();
}

fn close_edit(domain: &mut UserManagementDomainState) {
    domain.show_edit_modal = false;
    domain.selected_user = None;
    domain.form = UserForm::for_new_user();
}
