pub mod dashboard_config;
pub mod observability_config;
pub mod storage_config;
pub mod zendesk_config;

use serde::{Deserialize, Serialize};

use crate::errors::{CraftnetError, CraftnetResult};

pub use dashboard_config::DashboardConfig;
pub use observability_config::{LogFormat, ObservabilityConfig};
pub use storage_config::StorageConfig;
pub use zendesk_config::ZendeskConfig;

/// Environment variable holding the Zendesk API username.
pub const ENV_ZENDESK_USERNAME: &str = "ZENDESK_USERNAME";
/// Environment variable holding the Zendesk API token.
pub const ENV_ZENDESK_TOKEN: &str = "ZENDESK_TOKEN";
/// Environment variable overriding the SQLite database path.
pub const ENV_DB_PATH: &str = "CRAFTNET_DB_PATH";
/// Environment variable overriding the dashboard base URL.
pub const ENV_DASHBOARD_URL: &str = "CRAFTNET_DASHBOARD_URL";
/// Environment variable selecting the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CraftnetConfig {
    pub storage: StorageConfig,
    pub zendesk: ZendeskConfig,
    pub dashboard: DashboardConfig,
    pub observability: ObservabilityConfig,
}

impl CraftnetConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Check every section that has bounds. Zendesk credentials are checked
    /// when the client is built, not here.
    pub fn validate(&self) -> CraftnetResult<()> {
        if self.storage.read_pool_size == 0 {
            return Err(CraftnetError::ConfigError(
                "storage.read_pool_size must be at least 1".to_string(),
            ));
        }
        if self.zendesk.subdomain.trim().is_empty() {
            return Err(CraftnetError::ConfigError(
                "zendesk.subdomain must not be empty".to_string(),
            ));
        }
        self.dashboard.validate()?;
        Ok(())
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay values from the process environment. Set variables win over TOML.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary lookup (the process environment in production).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(username) = lookup(ENV_ZENDESK_USERNAME) {
            self.zendesk.username = Some(username);
        }
        if let Some(token) = lookup(ENV_ZENDESK_TOKEN) {
            self.zendesk.token = Some(token);
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.db_path = Some(path);
        }
        if let Some(url) = lookup(ENV_DASHBOARD_URL) {
            self.dashboard.base_url = url;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.log_format = LogFormat::parse(&format);
        }
    }
}
