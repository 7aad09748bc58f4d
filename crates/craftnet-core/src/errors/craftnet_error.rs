use super::{DashboardError, StorageError};

/// Top-level error type for craftnet.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum CraftnetError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("dashboard error: {0}")]
    DashboardError(#[from] DashboardError),

    #[error("invalid support plan: {label}")]
    InvalidPlan { label: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("observability error: {0}")]
    ObservabilityError(String),
}

/// Convenience type alias.
pub type CraftnetResult<T> = Result<T, CraftnetError>;
