//! Logging utilities
//!
//! The evaluator only emits `tracing` events. Embedding applications that
//! don't install their own subscriber can call [`init_logging`].

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::utils::error::{AuthzError, Result};

/// Build the level filter: `RUST_LOG` when set, the configured level otherwise
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        AuthzError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Install the global tracing subscriber
///
/// Fails with a configuration error if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AuthzError::Config(format!("Failed to initialize logging: {}", e)))
}
