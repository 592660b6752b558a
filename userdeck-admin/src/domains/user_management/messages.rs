use std::sync::Arc;
use userdeck_model::{Role, User, UserId, UserStatus};

use super::filter::{RoleFilter, StatusFilter};
use crate::infra::api_client::ApiError;

#[derive(Clone, Debug)]
pub enum Message {
    // Panel lifecycle and loading
    Activate,
    Deactivate,
    Refresh,
    UsersLoaded {
        generation: u64,
        result: Result<Vec<User>, Arc<ApiError>>,
    },

    // Filters
    SearchChanged(String),
    RoleFilterSelected(RoleFilter),
    StatusFilterSelected(StatusFilter),
    ClearFilters,

    // Shared form fields
    FormNameChanged(String),
    FormEmailChanged(String),
    FormRoleSelected(Role),
    FormStatusSelected(UserStatus),

    // User creation
    OpenAddModal,
    SubmitAdd,
    CancelAdd,

    // User updates
    EditUser(UserId),
    SubmitEdit,
    CancelEdit,

    // User deletion
    RequestDelete(UserId),
    ConfirmDelete,
    CancelDelete,

    /// Escape: closes the topmost overlay.
    DismissOverlay,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate => "UserManagement::Activate",
            Self::Deactivate => "UserManagement::Deactivate",
            Self::Refresh => "UserManagement::Refresh",
            Self::UsersLoaded { .. } => "UserManagement::UsersLoaded",

            Self::SearchChanged(_) => "UserManagement::SearchChanged",
            Self::RoleFilterSelected(_) => "UserManagement::RoleFilterSelected",
            Self::StatusFilterSelected(_) => {
                "UserManagement::StatusFilterSelected"
            }
            Self::ClearFilters => "UserManagement::ClearFilters",

            Self::FormNameChanged(_) => "UserManagement::FormNameChanged",
            Self::FormEmailChanged(_) => "UserManagement::FormEmailChanged",
            Self::FormRoleSelected(_) => "UserManagement::FormRoleSelected",
            Self::FormStatusSelected(_) => "UserManagement::FormStatusSelected",

            Self::OpenAddModal => "UserManagement::OpenAddModal",
            Self::SubmitAdd => "UserManagement::SubmitAdd",
            Self::CancelAdd => "UserManagement::CancelAdd",

            Self::EditUser(_) => "UserManagement::EditUser",
            Self::SubmitEdit => "UserManagement::SubmitEdit",
            Self::CancelEdit => "UserManagement::CancelEdit",

            Self::RequestDelete(_) => "UserManagement::RequestDelete",
            Self::ConfirmDelete => "UserManagement::ConfirmDelete",
            Self::CancelDelete => "UserManagement::CancelDelete",

            Self::DismissOverlay => "UserManagement::DismissOverlay",
        }
    }
}
