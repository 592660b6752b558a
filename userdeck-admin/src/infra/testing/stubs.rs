use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use reqwest::StatusCode;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use userdeck_model::{Role, User, UserId, UserStatus};

use crate::infra::{api_client::ApiError, services::UserAdminService};

const STUB_URL: &str = "stub://users";

#[derive(Debug, Clone, Default)]
pub struct StubUserAdminService {
    inner: Arc<RwLock<InnerStubState>>,
}

#[derive(Debug, Default)]
struct InnerStubState {
    users: Vec<User>,
    failure: Option<StatusCode>,
    latency: Option<Duration>,
    list_calls: usize,
}

impl StubUserAdminService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let stub = Self::new();
        stub.set_users(users);
        stub
    }

    /// A small, varied directory for offline demos.
    pub fn with_demo_users() -> Self {
        let now = Utc::now();
        let user = |id: i64,
                    name: &str,
                    email: &str,
                    role: Role,
                    status: UserStatus,
                    days_ago: Option<i64>| User {
            id: UserId(id),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            role: Some(role),
            status: Some(status),
            last_login: days_ago.map(|days| now - TimeDelta::days(days)),
        };

        Self::with_users(vec![
            user(1, "Ada Lovelace", "ada@example.com", Role::Admin, UserStatus::Active, Some(0)),
            user(2, "Grace Hopper", "grace@example.com", Role::User, UserStatus::Active, Some(3)),
            user(3, "Alan Turing", "alan@example.com", Role::User, UserStatus::Inactive, Some(42)),
            user(4, "Katherine Johnson", "katherine@example.com", Role::Admin, UserStatus::Inactive, None),
            user(5, "Edsger Dijkstra", "edsger@example.com", Role::User, UserStatus::Active, Some(11)),
        ])
    }

    pub fn set_users(&self, users: Vec<User>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.users = users;
        }
    }

    /// Make subsequent `list_users` calls fail with the given status.
    pub fn fail_with(&self, status: StatusCode) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failure = Some(status);
        }
    }

    pub fn clear_failure(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failure = None;
        }
    }

    /// Delay every `list_users` call, to keep a load in flight.
    pub fn set_latency(&self, latency: Option<Duration>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.latency = latency;
        }
    }

    pub fn list_calls(&self) -> usize {
        self.inner.read().map(|inner| inner.list_calls).unwrap_or(0)
    }
}

#[async_trait]
impl UserAdminService for StubUserAdminService {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let latency = self.inner.read().ok().and_then(|inner| inner.latency);
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut inner = self.inner.write().map_err(|_| ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: STUB_URL.to_string(),
        })?;
        inner.list_calls += 1;

        match inner.failure {
            Some(status) => Err(ApiError::Status {
                status,
                url: STUB_URL.to_string(),
            }),
            None => Ok(inner.users.clone()),
        }
    }
}
