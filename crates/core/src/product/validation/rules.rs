//! Validation result types.

use serde::{Deserialize, Serialize};

use crate::product::model::ProductField;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: ProductField,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: ProductField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Aggregated result of one or more validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_errors(Vec::new())
    }
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Append another result's errors after this one's.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
        self
    }

    /// Whether any error is attached to `field`.
    pub fn has_error_for(&self, field: ProductField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Errors attached to `field`, in the order they were produced.
    pub fn errors_for(&self, field: ProductField) -> impl Iterator<Item = &FieldViolation> {
        self.errors.iter().filter(move |e| e.field == field)
    }
}
