//! Tracing subscriber setup for hosts that want to see lifecycle events.

use tracing_subscriber::EnvFilter;

use crate::error::{ResourceError, Result};
use crate::resource::manager::replay_startup_warning;

/// Environment variable holding the filter directives, e.g. `native_resource=debug`.
pub const LOG_ENV: &str = "NATIVE_RESOURCE_LOG";

/// Installs a global fmt subscriber.
///
/// Directives come from [`LOG_ENV`] when set, otherwise from `default_directive`.
/// Fails if the directives do not parse or a global subscriber is already set.
/// A configuration warning the global manager raised earlier is logged again here.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = build_filter(default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|err| ResourceError::Config {
            key: "tracing subscriber",
            reason: err.to_string(),
        })?;

    replay_startup_warning();
    Ok(())
}

fn build_filter(default_directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| ResourceError::Config {
            key: LOG_ENV,
            reason: err.to_string(),
        })
}
