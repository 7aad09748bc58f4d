//! Structured logging setup.
//!
//! `RUST_LOG` selects the filter (falling back to the configured default) and
//! `LOG_FORMAT` / `ObservabilityConfig::log_format` picks pretty or JSON output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::errors::{CraftnetError, CraftnetResult};

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_filter`.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_filter))
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> CraftnetResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.log_format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    result.map_err(|e| CraftnetError::ObservabilityError(e.to_string()))?;
    tracing::debug!(format = ?config.log_format, filter = %config.default_filter, "Tracing initialized");
    Ok(())
}
