//! Local-only mutations of the in-memory user list.
//!
//! None of these talk to the server. The list diverges from the backend until
//! the next reload replaces it wholesale.

use std::str::FromStr;
use userdeck_model::{NewUser, User, UserId};

/// How provisional ids are assigned to locally added records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// `len + 1`. Collides with a live id once any record has been deleted.
    ListLength,
    /// One past the largest id in the list.
    #[default]
    NextAfterMax,
}

impl IdPolicy {
    pub fn next_id(self, users: &[User]) -> UserId {
        match self {
            IdPolicy::ListLength => {
                let len = i64::try_from(users.len()).unwrap_or(i64::MAX);
                UserId(len.saturating_add(1))
            }
            IdPolicy::NextAfterMax => users
                .iter()
                .map(|user| user.id)
                .max()
                .map(UserId::next)
                .unwrap_or(UserId(1)),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list-length" | "list_length" | "length" => Ok(IdPolicy::ListLength),
            "next-after-max" | "next_after_max" | "max" => {
                Ok(IdPolicy::NextAfterMax)
            }
            other => Err(format!("unknown id policy '{other}'")),
        }
    }
}

/// Append a record with a provisional id and return that id.
pub fn append_user(
    users: &mut Vec<User>,
    new_user: NewUser,
    policy: IdPolicy,
) -> UserId {
    let id = policy.next_id(users);
    users.push(new_user.with_id(id));
    id
}

/// Replace every record carrying `updated.id`, keeping positions.
///
/// Returns false (and leaves the list alone) when no record matches.
pub fn replace_user(users: &mut [User], updated: User) -> bool {
    let mut replaced = false;
    for user in users.iter_mut().filter(|user| user.id == updated.id) {
        *user = updated.clone();
        replaced = true;
    }
    replaced
}

/// Remove every record with `id`, returning how many were dropped.
pub fn remove_user(users: &mut Vec<User>, id: UserId) -> usize {
    let before = users.len();
    users.retain(|user| user.id != id);
    before - users.len()
}
