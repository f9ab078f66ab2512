//! Planning-session error types.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Goal,
    Initiative,
    Stakeholder,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Goal => "Goal",
            RecordKind::Initiative => "Initiative",
            RecordKind::Stakeholder => "Stakeholder",
        };
        f.write_str(s)
    }
}

/// Errors raised by planning-session mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// Required text missing or a value out of range; the record was not changed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// No record matched the given name or position.
    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },
}

impl PlanningError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanningError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: RecordKind, key: impl ToString) -> Self {
        PlanningError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PlanningError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanningError::NotFound { kind, .. } => match kind {
                RecordKind::Goal => ErrorCode::GoalNotFound,
                RecordKind::Initiative => ErrorCode::InitiativeNotFound,
                RecordKind::Stakeholder => ErrorCode::StakeholderNotFound,
            },
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationError> for PlanningError {
    fn from(err: ValidationError) -> Self {
        PlanningError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<PlanningError> for DomainError {
    fn from(err: PlanningError) -> Self {
        let code = err.code();
        match &err {
            PlanningError::ValidationFailed { field, .. } => {
                let field = field.clone();
                DomainError::new(code, err.message()).with_detail("field", field)
            }
            PlanningError::NotFound { key, .. } => {
                let key = key.clone();
                DomainError::new(code, err.message()).with_detail("key", key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_follow_record_kind() {
        assert_eq!(
            PlanningError::not_found(RecordKind::Initiative, "Chatbot").code(),
            ErrorCode::InitiativeNotFound
        );
        assert_eq!(
            PlanningError::not_found(RecordKind::Stakeholder, 3).code(),
            ErrorCode::StakeholderNotFound
        );
    }

    #[test]
    fn message_names_the_record() {
        let err = PlanningError::not_found(RecordKind::Goal, 7);
        assert_eq!(err.message(), "Goal not found: 7");
    }

    #[test]
    fn validation_error_keeps_field() {
        let err: PlanningError = ValidationError::empty_field("name").into();
        assert!(matches!(
            err,
            PlanningError::ValidationFailed { ref field, .. } if field == "name"
        ));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn converts_to_domain_error_with_detail() {
        let err: DomainError = PlanningError::validation("role", "role is required").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("role"));
    }
}
