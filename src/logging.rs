//! Logging initialization for the preview binary.
//!
//! Logs go to stderr so rendered HTML on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Resolve the filter directive from config and flags.
///
/// `RUST_LOG` wins over everything, then `--debug`, then the config level.
pub fn filter_directive(config: &Config, debug_override: bool) -> String {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    std::env::var("RUST_LOG").unwrap_or(log_level)
}

/// Initialize logging based on configuration.
///
/// # Arguments
/// * `config` - Application configuration
/// * `debug_override` - If true, override log level to "debug" (from --debug flag)
pub fn init_logging(config: &Config, debug_override: bool) {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_overrides_config_level() {
        // RUST_LOG in the test environment would take precedence
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = Config::default();
        assert_eq!(filter_directive(&config, false), "warn");
        assert_eq!(filter_directive(&config, true), "debug");
    }

    #[test]
    fn test_configured_level_is_used() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let mut config = Config::default();
        config.logging.level = "info".to_string();
        assert_eq!(filter_directive(&config, false), "info");
    }
}
