//! Business goal value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A free-text business goal. Never empty; surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Goal(String);

impl Goal {
    /// Creates a goal from user text.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is empty after trimming
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("goal"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Goal {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Goal::new(text)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.0
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
