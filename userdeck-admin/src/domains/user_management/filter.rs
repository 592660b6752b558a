//! Filter engine for the users table.
//!
//! Filtering is a pure function of the list and the criteria. Nothing here is
//! cached; the view recomputes the subset on every pass.

use std::fmt;
use userdeck_model::{Role, User, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 3] = [
        RoleFilter::All,
        RoleFilter::Only(Role::Admin),
        RoleFilter::Only(Role::User),
    ];

    pub fn matches(self, user: &User) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(role) => user.effective_role() == role,
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::All => f.write_str("All Roles"),
            RoleFilter::Only(role) => f.write_str(role.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Only(UserStatus::Active),
        StatusFilter::Only(UserStatus::Inactive),
    ];

    /// A record without a status only passes `All`.
    pub fn matches(self, user: &User) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => user.status == Some(status),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All Status"),
            StatusFilter::Only(status) => f.write_str(status.label()),
        }
    }
}

/// Search term plus role and status criteria, AND-ed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub search: String,
    pub role: RoleFilter,
    pub status: StatusFilter,
}

impl UserFilter {
    /// Case-insensitive substring match over name or email.
    ///
    /// An empty term matches everything. A non-empty term never matches a
    /// record that has neither a name nor an email.
    pub fn matches_search(&self, user: &User) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        contains(&user.name) || contains(&user.email)
    }

    pub fn matches(&self, user: &User) -> bool {
        self.matches_search(user)
            && self.role.matches(user)
            && self.status.matches(user)
    }

    /// Matching records in list order.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }

    pub fn is_default(&self) -> bool {
        *self == UserFilter::default()
    }
}
