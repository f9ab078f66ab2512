use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::ReportError;
use crate::ports::StorageError;

/// Errors from the report export and load handlers.
#[derive(Debug, Clone, Error)]
pub enum ReportHandlerError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ReportHandlerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportHandlerError::Report(e) => e.code(),
            ReportHandlerError::Storage(e) => e.code(),
        }
    }
}

impl From<ReportHandlerError> for DomainError {
    fn from(err: ReportHandlerError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
