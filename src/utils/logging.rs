//! Logging initialisation
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level. Events raised while the configuration itself is loading go
//! to a scoped startup subscriber.

use crate::config::{LogFormat, LoggingConfig};
use tracing::Dispatch;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Build the env filter for a configuration, honouring `RUST_LOG`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed (tests, embedding).
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.is_ok()
}

/// Subscriber for the current thread until the guard drops.
///
/// Used before the configuration is known, so `Config::load` can report a
/// missing file or a rejected override.
pub fn startup_logging(config: &LoggingConfig) -> DefaultGuard {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let dispatch = match config.format {
        LogFormat::Json => Dispatch::new(builder.json().finish()),
        LogFormat::Text => Dispatch::new(builder.finish()),
    };
    tracing::dispatcher::set_default(&dispatch)
}
