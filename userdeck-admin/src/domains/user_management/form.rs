use userdeck_model::{NewUser, Role, User, UserStatus};

/// Field values backing the add and edit modals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserForm {
    /// Blank form with the add modal's preselected role and status.
    pub fn for_new_user() -> Self {
        Self {
            role: Some(Role::User),
            status: Some(UserStatus::Active),
            ..Self::default()
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role: user.role,
            status: user.status,
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: non_blank(&self.name),
            email: non_blank(&self.email),
            role: self.role,
            status: self.status,
            last_login: None,
        }
    }

    /// Overlay the form onto an existing record. Id and last login are kept.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: non_blank(&self.name),
            email: non_blank(&self.email),
            role: self.role,
            status: self.status,
            last_login: user.last_login,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
