use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while encoding or decoding an action-plan report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("Failed to parse report: {0}")]
    Parse(String),
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ReportSerialization
    }
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
