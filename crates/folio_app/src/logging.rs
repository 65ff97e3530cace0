use tracing_subscriber::EnvFilter;

use crate::{ConfigError, LogConfig};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter when it is set and valid.
/// Returns `Ok(false)` if another global subscriber was already installed.
pub fn init_tracing(config: &LogConfig) -> Result<bool, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|source| ConfigError::LogFilter {
            filter: config.filter.clone(),
            source,
        })?,
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok())
}
