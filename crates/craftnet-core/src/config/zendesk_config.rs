//! Support-ticketing (Zendesk) client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Zendesk API client.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZendeskConfig {
    /// Account subdomain, i.e. `{subdomain}.zendesk.com`.
    pub subdomain: String,
    pub username: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ZendeskConfig {
    fn default() -> Self {
        Self {
            subdomain: "craftcms".to_string(),
            username: None,
            token: None,
            timeout_secs: 30,
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ZendeskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZendeskConfig")
            .field("subdomain", &self.subdomain)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
