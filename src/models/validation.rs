//! Validation outcome for user-entered input.

use serde::{Deserialize, Serialize};

/// Result of validating a single user input field.
///
/// Expected input errors are values, not panics or `Err`s: the UI renders
/// the message inline and never needs to catch anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// Input passed validation; carries the parsed numeric value.
    Valid { value: f64 },
    /// Input failed validation; carries the message to show the user.
    Invalid { message: String },
}

impl ValidationResult {
    /// Build a passing result.
    pub fn valid(value: f64) -> Self {
        ValidationResult::Valid { value }
    }

    /// Build a failing result with a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            message: message.into(),
        }
    }

    /// Whether the input passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Parsed value, if the input passed.
    pub fn value(&self) -> Option<f64> {
        match self {
            ValidationResult::Valid { value } => Some(*value),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// User-facing error message, if the input failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { message } => Some(message),
        }
    }
}
