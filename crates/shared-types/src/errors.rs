//! # Error Types
//!
//! Validation errors shown to the user as blocking messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Address;

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found.
    pub valid: bool,
    /// Blocking problems.
    pub errors: Vec<ValidationError>,
    /// Non-blocking problems.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Result with no findings.
    pub fn ok() -> Self {
        Self {
            valid: true,
            ..Default::default()
        }
    }

    /// Record a blocking problem.
    pub fn push_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Record a non-blocking problem.
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Validate an address, collecting every finding instead of stopping at the
/// first one.
pub fn validate_address(address: &Address) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if address.subject.trim().is_empty() {
        result.push_error(ValidationError::new("subject", "субъект РФ обязателен"));
    }
    if address.house.trim().is_empty() {
        result.push_error(ValidationError::new("house", "номер дома обязателен"));
    }
    if address.city.trim().is_empty() {
        result.push_warning("город не указан");
    }
    if address.street.trim().is_empty() {
        result.push_warning("улица не указана");
    }

    result
}
