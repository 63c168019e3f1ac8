//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; embedding applications decide
//! whether to install a subscriber. [`init_tracing`] is the stock choice.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a global fmt subscriber using the configured level and format.
///
/// `RUST_LOG` directives in `config.log_level` are honoured. Output is
/// newline-delimited JSON when `LOG_FORMAT=json`, human-readable text otherwise.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global subscriber
/// has already been installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| anyhow!("invalid log filter '{}': {e}", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.is_json_logging() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = Config {
            log_level: "realty_agency=loud".to_string(),
            ..Config::default()
        };

        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = Config::default();

        // Another test may have installed the subscriber first; either way the
        // second call must fail.
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
