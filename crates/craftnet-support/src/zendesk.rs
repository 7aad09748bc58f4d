//! Zendesk API client factory.
//!
//! Credentials come from `ZENDESK_USERNAME` / `ZENDESK_TOKEN` (or the
//! `[zendesk]` config section) and are sent as HTTP basic auth using the
//! API-token form `{username}/token:{token}`.

use std::fmt;

use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;

use craftnet_core::config::ZendeskConfig;
use craftnet_core::{CraftnetConfig, CraftnetError, CraftnetResult};

/// Service identifier the support desk lives under.
pub const DEFAULT_SUBDOMAIN: &str = "craftcms";

/// Authenticated Zendesk REST client.
#[derive(Clone)]
pub struct ZendeskClient {
    http: Client,
    base_url: Url,
    subdomain: String,
    username: String,
    token: String,
}

impl fmt::Debug for ZendeskClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZendeskClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn required(value: Option<&String>, name: &str) -> CraftnetResult<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CraftnetError::ConfigError(format!("zendesk {name} is not set")))
}

impl ZendeskClient {
    /// Build a client from the `[zendesk]` section.
    ///
    /// Fails when the username or token is missing or the subdomain is not a
    /// plain hostname label.
    pub fn from_config(config: &ZendeskConfig) -> CraftnetResult<Self> {
        let username = required(config.username.as_ref(), "username")?;
        let token = required(config.token.as_ref(), "token")?;

        let subdomain = config.subdomain.trim();
        if subdomain.is_empty()
            || !subdomain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(CraftnetError::ConfigError(format!(
                "invalid zendesk subdomain: {subdomain:?}"
            )));
        }

        let base_url = Url::parse(&format!("https://{subdomain}.zendesk.com/api/v2/"))
            .map_err(|e| CraftnetError::ConfigError(format!("zendesk base url: {e}")))?;

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| CraftnetError::ConfigError(format!("zendesk http client: {e}")))?;

        debug!(subdomain, username = %username, "Zendesk client created");

        Ok(Self {
            http,
            base_url,
            subdomain: subdomain.to_string(),
            username,
            token,
        })
    }

    /// Build a client from the process environment.
    pub fn from_env() -> CraftnetResult<Self> {
        Self::from_config(&CraftnetConfig::from_env().zendesk)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Basic-auth user for API-token authentication.
    pub fn api_user(&self) -> String {
        format!("{}/token", self.username)
    }

    /// An authenticated request for an API path such as `tickets/1.json`.
    ///
    /// The path is resolved under `/api/v2/`; a leading `/` is ignored and
    /// traversal sequences are rejected.
    pub fn request(&self, method: Method, path: &str) -> CraftnetResult<RequestBuilder> {
        let path = path.trim_start_matches('/');
        if path.contains("..") || path.contains("//") || path.contains("://") {
            return Err(CraftnetError::InvalidInput(format!("invalid zendesk path: {path}")));
        }

        let url = self
            .base_url
            .join(path)
            .map_err(|e| CraftnetError::InvalidInput(format!("invalid zendesk path {path}: {e}")))?;

        Ok(self
            .http
            .request(method, url)
            .basic_auth(self.api_user(), Some(&self.token)))
    }
}
