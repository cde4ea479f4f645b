//! Logging initialization built on the tracing ecosystem.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logger configuration for the CodeSentry binaries
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: Level,
    pub include_location: bool,
    pub colored_output: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_location: false,
            colored_output: true,
        }
    }
}

/// Initialize logging with configuration.
///
/// `RUST_LOG` overrides the configured default level when set.
pub fn init_logging(config: &LoggerConfig) -> crate::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(config.colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| crate::UtilError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Initialize basic logging with the default configuration.
pub fn init_default_logging() -> crate::Result<()> {
    init_logging(&LoggerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(config.colored_output);
    }

    #[test]
    fn test_init_is_idempotent_failure() {
        // A second init attempt must report an error, not panic.
        let config = LoggerConfig::default();
        let first = init_logging(&config);
        let second = init_logging(&config);
        assert!(first.is_ok() || second.is_err());
    }
}
