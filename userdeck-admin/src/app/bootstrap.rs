use std::sync::Arc;
use std::time::Duration;

use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::user_management::messages::Message as UserManagementMessage;
use crate::domains::user_management::records::IdPolicy;
use crate::domains::user_management::update::update_user_management;
use crate::infra::api_client::{ApiClient, normalize_base_url};
use crate::infra::services::{UserAdminApiAdapter, UserAdminService};
use crate::infra::testing::StubUserAdminService;
use crate::state::State;

/// Simulated round trip for the in-memory service, so loading is visible.
const STUB_LATENCY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_url: Arc<str>,
    pub users_path: Arc<str>,
    pub request_timeout: Duration,
    pub id_policy: IdPolicy,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(normalize_base_url(&server_url.into())),
            users_path: Arc::from(State::DEFAULT_USERS_PATH),
            request_timeout: ApiClient::DEFAULT_TIMEOUT,
            id_policy: IdPolicy::default(),
            use_test_stubs: false,
        }
    }

    pub fn from_environment() -> Self {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args())
    }

    /// Build from a variable lookup and command-line arguments. Invalid
    /// values fall back to their defaults with a warning.
    pub fn from_sources<F, I>(lookup: F, args: I) -> Self
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let server_url = lookup("USERDECK_SERVER_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| State::DEFAULT_SERVER_URL.to_string());

        let mut config = Self::new(server_url);

        if let Some(path) = lookup("USERDECK_USERS_PATH")
            .filter(|value| !value.trim().is_empty())
        {
            config = config.with_users_path(path);
        }

        if let Some(raw) = lookup("USERDECK_REQUEST_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.request_timeout = Duration::from_secs(secs);
                }
                _ => log::warn!(
                    "Ignoring USERDECK_REQUEST_TIMEOUT_SECS={:?}; using {:?}",
                    raw,
                    config.request_timeout
                ),
            }
        }

        if let Some(raw) = lookup("USERDECK_ID_POLICY") {
            match raw.parse::<IdPolicy>() {
                Ok(policy) => config.id_policy = policy,
                Err(err) => log::warn!("{}; using {:?}", err, config.id_policy),
            }
        }

        let env_stubs = lookup("USERDECK_USE_STUBS").unwrap_or_default();
        config.use_test_stubs = matches!(
            env_stubs.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ) || args.into_iter().any(|arg| arg == "--stubs");

        config
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn users_path(&self) -> &str {
        &self.users_path
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn with_users_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self.users_path = Arc::from(path);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }
}

/// Build the initial state and wire the user service. Nothing is fetched yet.
pub fn base_state(config: &AppConfig) -> State {
    let mut state = State::new(config.server_url(), config.users_path());
    let user_management = &mut state.domains.user_management.state;
    user_management.id_policy = config.id_policy;

    if config.use_test_stubs() {
        log::info!("Using in-memory user service (stubs enabled)");
        let stub = StubUserAdminService::with_demo_users();
        stub.set_latency(Some(STUB_LATENCY));
        let service: Arc<dyn UserAdminService> = Arc::new(stub);
        user_management.user_admin_service = Some(service);
        return state;
    }

    match ApiClient::with_timeout(config.server_url(), config.request_timeout) {
        Ok(client) => {
            let adapter = UserAdminApiAdapter::new(
                Arc::new(client),
                Arc::clone(&config.users_path),
            );
            user_management.user_admin_service = Some(Arc::new(adapter));
        }
        Err(err) => {
            log::error!("Failed to create API client: {}", err);
        }
    }

    state
}

/// Boot logic used by the runtime application: build state and activate the
/// users panel, which issues the initial read.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let mut state = base_state(config);
    let result = update_user_management(&mut state, UserManagementMessage::Activate);
    (state, result.task)
}
