//! Wire format of the user-list endpoint.

use serde::Deserialize;
use userdeck_model::{
    Role, User, UserId, UserStatus, parse_optional_timestamp,
};

use crate::infra::api_client::ApiError;

/// One element of the `GET /api/users` response array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Sent as a boolean, `true` marks an administrator.
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub last_login: Option<String>,
}

impl TryFrom<UserRecord> for User {
    type Error = ApiError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let id = UserId(record.id);
        let last_login = parse_optional_timestamp(record.last_login.as_deref())
            .map_err(|source| ApiError::InvalidRecord { id, source })?;

        Ok(User {
            id,
            name: record.name,
            email: record.email,
            role: record.role,
            status: record.status,
            last_login,
        })
    }
}

/// Validate a decoded payload. The first invalid record fails the whole batch.
pub fn into_users(records: Vec<UserRecord>) -> Result<Vec<User>, ApiError> {
    records.into_iter().map(User::try_from).collect()
}
