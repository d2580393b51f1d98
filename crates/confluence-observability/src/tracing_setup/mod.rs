//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use confluence_core::config::ObservabilityConfig;
use confluence_core::constants::LOG_ENV_VAR;

/// Error returned when a global subscriber is already installed.
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber from config. `CONFLUENCE_LOG` wins over
/// `log_level`, and an unparsable level falls back to `info`. `json = false`
/// selects the human-readable format. Returns an error instead of panicking
/// when a subscriber is already installed.
pub fn try_init_from_config(config: &ObservabilityConfig) -> Result<(), TracingInitError> {
    let filter = resolve_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

fn resolve_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_an_error_instead_of_panicking() {
        let config = ObservabilityConfig {
            log_level: "warn".to_string(),
            json: false,
        };
        // Another test may already have installed one; either way the
        // second attempt must fail cleanly.
        let _ = try_init_from_config(&config);
        assert!(try_init_from_config(&config).is_err());
    }

    #[test]
    fn config_level_is_used_without_env_override() {
        if std::env::var(LOG_ENV_VAR).is_ok() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            json: true,
        };
        assert_eq!(resolve_filter(&config).to_string(), "debug");
    }

    #[test]
    fn unparsable_level_falls_back_to_info() {
        if std::env::var(LOG_ENV_VAR).is_ok() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "confluence=loud".to_string(),
            json: true,
        };
        assert_eq!(resolve_filter(&config).to_string(), "info");
    }
}
