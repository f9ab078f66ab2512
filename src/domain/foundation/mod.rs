//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, categorical enums, and error types
//! that form the vocabulary of the strategy mapping domain.

mod errors;
mod ids;
mod levels;
mod money;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ReportId, SessionId};
pub use levels::{EngagementLevel, Level, Sentiment, Timeline};
pub use money::{Money, MAX_AMOUNT, MIN_POSITIVE_AMOUNT};
pub use percentage::Percentage;
pub use timestamp::{Timestamp, DAYS_PER_PLANNING_MONTH};
