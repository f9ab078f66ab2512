//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `strategy_mapper=debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set.
    pub fn init_tracing(&self) -> Result<(), ConfigError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| ConfigError::TracingInit(e.to_string()))?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        let result = match self.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        result.map_err(|e| ConfigError::TracingInit(e.to_string()))
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        EnvFilter::try_new(&self.level)
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn module_directives_are_valid() {
        let config = LoggingConfig {
            level: "strategy_mapper=debug,warn".to_string(),
            format: LogFormat::Json,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_level_is_rejected() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            format: LogFormat::Pretty,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        );
    }

    #[test]
    fn malformed_level_is_rejected() {
        let config = LoggingConfig {
            level: "strategy_mapper=loud".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
