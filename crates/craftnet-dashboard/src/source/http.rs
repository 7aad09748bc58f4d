//! reqwest-backed dashboard source.

use craftnet_core::config::DashboardConfig;
use craftnet_core::DashboardError;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use super::DashboardSource;
use crate::payload::DashboardPayload;

/// GETs the dashboard bundle as JSON from `{base_url}{path}`.
#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    client: Client,
    url: Url,
}

impl HttpDashboardSource {
    /// Build a source with its own client, bounded by the configured timeouts.
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;

        let url = endpoint_url(config)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| DashboardError::Config(format!("http client: {e}")))?;

        Ok(Self { client, url })
    }

    /// Use a caller-supplied client (shared pools, custom middleware).
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Join the configured base URL and path.
pub fn endpoint_url(config: &DashboardConfig) -> Result<Url, DashboardError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| DashboardError::Config(format!("invalid base_url {}: {e}", config.base_url)))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(DashboardError::Config(format!(
            "unsupported scheme in base_url: {}",
            base.scheme()
        )));
    }
    base.join(&config.path)
        .map_err(|e| DashboardError::Config(format!("invalid path {}: {e}", config.path)))
}

impl DashboardSource for HttpDashboardSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<DashboardPayload, DashboardError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Dashboard bundle received");
        serde_json::from_str(&body).map_err(|e| DashboardError::Decode(e.to_string()))
    }
}
