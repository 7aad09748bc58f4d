//! Dashboard fetch configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Configuration for loading the account dashboard bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Scheme and host of the account API, e.g. `https://id.craftcms.com`.
    pub base_url: String,
    /// Path of the dashboard bundle endpoint.
    pub path: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// When true, concurrent loads share one pending fetch.
    /// When false, every load issues its own request and the last write wins.
    pub coalesce_in_flight: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "https://id.craftcms.com".to_string(),
            path: "/api/craft-id".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            coalesce_in_flight: true,
        }
    }
}

impl DashboardConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// - `timeout_secs`: 1-300
    /// - `connect_timeout_secs`: 1-60
    /// - `path` must start with `/`
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(DashboardError::Config(
                "timeout_secs must be between 1 and 300".to_string(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(DashboardError::Config(
                "connect_timeout_secs must be between 1 and 60".to_string(),
            ));
        }
        if !self.path.starts_with('/') {
            return Err(DashboardError::Config("path must start with '/'".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
