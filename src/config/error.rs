//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log level filter: {0}")]
    InvalidLogLevel(String),

    #[error("Timeline limit must be at least 1")]
    InvalidTimelineLimit,

    #[error("Maximum report size must be greater than zero")]
    InvalidMaxReportSize,

    #[error("Reference date out of range: {0}")]
    InvalidReferenceDate(String),
}
