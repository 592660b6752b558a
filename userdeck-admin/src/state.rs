use crate::domains::DomainRegistry;

/// Root application state handed to `update` and `view`.
#[derive(Debug)]
pub struct State {
    /// Domain registry containing all domain-specific state
    pub domains: DomainRegistry,

    /// Server URL the read endpoint is resolved against
    pub server_url: String,
    pub users_path: String,
}

impl State {
    pub const DEFAULT_SERVER_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_USERS_PATH: &'static str = "/api/users";

    pub fn new(server_url: impl Into<String>, users_path: impl Into<String>) -> Self {
        Self {
            domains: DomainRegistry::default(),
            server_url: server_url.into(),
            users_path: users_path.into(),
        }
    }

    /// Full URL of the users read endpoint, for display.
    pub fn users_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.users_path.trim_start_matches('/')
        )
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SERVER_URL, Self::DEFAULT_USERS_PATH)
    }
}
