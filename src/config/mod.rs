//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STRATEGY_MAPPER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_mapper::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports go to {}", config.report.output_dir.display());
//! ```

mod error;
mod logging;
mod planning;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use planning::PlanningConfig;
pub use report::{ReportConfig, DEFAULT_MAX_REPORT_BYTES};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output directory, timeline size and size cap
    #[serde(default)]
    pub report: ReportConfig,

    /// Reference date override
    #[serde(default)]
    pub planning: PlanningConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STRATEGY_MAPPER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRATEGY_MAPPER__REPORT__OUTPUT_DIR=out` -> `report.output_dir = "out"`
    /// - `STRATEGY_MAPPER__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `STRATEGY_MAPPER__PLANNING__REFERENCE_DATE=2024-01-15`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRATEGY_MAPPER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.report.validate()?;
        self.planning.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "STRATEGY_MAPPER__LOGGING__LEVEL",
        "STRATEGY_MAPPER__LOGGING__FORMAT",
        "STRATEGY_MAPPER__REPORT__OUTPUT_DIR",
        "STRATEGY_MAPPER__REPORT__TIMELINE_LIMIT",
        "STRATEGY_MAPPER__REPORT__MAX_REPORT_BYTES",
        "STRATEGY_MAPPER__PLANNING__REFERENCE_DATE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.report.timeline_limit, 5);
        assert_eq!(config.report.max_report_bytes, DEFAULT_MAX_REPORT_BYTES);
        assert!(config.planning.reference_date.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STRATEGY_MAPPER__LOGGING__FORMAT", "json");
        env::set_var("STRATEGY_MAPPER__REPORT__OUTPUT_DIR", "/tmp/plans");
        env::set_var("STRATEGY_MAPPER__REPORT__TIMELINE_LIMIT", "3");
        env::set_var("STRATEGY_MAPPER__PLANNING__REFERENCE_DATE", "2024-01-15");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.report.output_dir, PathBuf::from("/tmp/plans"));
        assert_eq!(config.report.timeline_limit, 3);
        assert_eq!(
            config.planning.reference_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeline() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STRATEGY_MAPPER__REPORT__TIMELINE_LIMIT", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTimelineLimit)
        );
    }

    #[test]
    fn test_unparseable_value_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STRATEGY_MAPPER__REPORT__TIMELINE_LIMIT", "several");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
