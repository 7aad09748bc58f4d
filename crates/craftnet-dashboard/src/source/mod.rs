//! Where the dashboard bundle comes from.

use std::future::Future;

use craftnet_core::DashboardError;

use crate::payload::DashboardPayload;

pub mod http;

pub use http::HttpDashboardSource;

/// Fetches one dashboard bundle per call. No retries.
pub trait DashboardSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<DashboardPayload, DashboardError>> + Send;
}
