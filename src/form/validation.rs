//! Required-field validation for pass slip requests.
//!
//! Every failure is a [`ValidationError::MissingRequiredField`] carrying the
//! fixed message shown next to the offending input.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::models::{ApplicationRequest, Field};
use crate::generators::traits::Validator;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingRequiredField {
        field: Field,
        message: &'static str,
    },
}

impl ValidationError {
    /// Create error for empty required field
    pub fn empty_field(field: Field, message: &'static str) -> Self {
        Self::MissingRequiredField { field, message }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::MissingRequiredField { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { message, .. } => *message,
        }
    }
}

/// Field to error map, at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Numbered summary of every error, for surfaces that show them together.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} error(s) found\n",
            self.errors.len()
        )];

        for (i, error) in self.iter().enumerate() {
            parts.push(format!("{}. [{}] {}", i + 1, error.field().key(), error));
        }

        parts.push(String::new());
        parts.push("Please correct the fields above and try again.".to_string());

        parts.join("\n")
    }

    /// Ok if no errors, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_message())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(
    value: &str,
    field: Field,
    message: &'static str,
    errors: &mut ValidationErrors,
) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, message));
    }
}

/// Validate that a choice has been made
pub fn validate_selected<T>(
    value: Option<&T>,
    field: Field,
    message: &'static str,
    errors: &mut ValidationErrors,
) {
    if value.is_none() {
        errors.add(ValidationError::empty_field(field, message));
    }
}

impl Validator for ApplicationRequest {
    // A return time earlier than the out time is accepted.
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        validate_required(
            &self.full_name,
            Field::FullName,
            "Full name is required",
            &mut errors,
        );
        validate_selected(self.rank.as_ref(), Field::Rank, "Rank is required", &mut errors);
        validate_selected(
            self.time_out.as_ref(),
            Field::TimeOut,
            "Time to be out is required",
            &mut errors,
        );
        validate_selected(
            self.time_return.as_ref(),
            Field::TimeReturn,
            "Time to return is required",
            &mut errors,
        );
        validate_required(
            &self.places_to_visit,
            Field::PlacesToVisit,
            "Place(s) to be visited is required",
            &mut errors,
        );

        errors
    }
}
