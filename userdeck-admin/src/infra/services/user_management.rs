use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use userdeck_model::User;

use crate::infra::{
    api_client::{ApiClient, ApiError},
    api_types::{UserRecord, into_users},
};

/// Read access to the user directory backing the admin panel.
///
/// Writes are intentionally absent: adds, edits and deletes only touch the
/// dashboard's local list until the next reload.
#[async_trait]
pub trait UserAdminService: Send + Sync + Debug {
    /// List users for the admin panel
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
    users_path: Arc<str>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>, users_path: impl Into<Arc<str>>) -> Self {
        Self {
            client,
            users_path: users_path.into(),
        }
    }

    pub fn users_url(&self) -> String {
        self.client.build_url(&*self.users_path)
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        // Server returns a bare array of user records
        let records: Vec<UserRecord> = self.client.get(&self.users_path).await?;
        into_users(records)
    }
}
