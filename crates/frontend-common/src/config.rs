//! Frontend configuration

use std::time::Duration;

/// Keys read from and written to persisted client storage
pub struct StorageKeys;

impl StorageKeys {
    /// Credential token
    pub const TOKEN: &'static str = "token";

    /// Cached user info, only ever cleared from here
    pub const USER: &'static str = "user";
}

/// Portal configuration shared by the frontend crates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Origin of the report service, without trailing slash
    pub api_base_url: String,
    /// Simulated delay before the assessment list is shown
    pub load_delay: Duration,
}

impl PortalConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5000";
    pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            load_delay: Duration::from_millis(Self::DEFAULT_LOAD_DELAY_MS),
        }
    }
}
