use super::models::{ApplicationRequest, Field, FieldEdit};
use super::validation::{ValidationError, ValidationErrors};
use crate::generators::traits::Validator;

/// Holds the live request of one form session and its field errors.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    request: ApplicationRequest,
    errors: ValidationErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &ApplicationRequest {
        &self.request
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Replace one field's value and drop that field's error, if any.
    ///
    /// Other fields are not re-validated.
    pub fn set_field(&mut self, edit: FieldEdit) {
        let field = edit.field();
        self.request.apply(edit);
        if self.errors.remove(field).is_some() {
            log::debug!("Cleared error on {} after edit", field.key());
        }
    }

    /// Check every required field, remember the outcome and return it.
    pub fn validate(&mut self) -> ValidationErrors {
        let errors = Validator::validate(&self.request);
        self.errors = errors.clone();
        errors
    }

    /// Back to an empty form with no errors.
    pub fn reset(&mut self) {
        self.request = ApplicationRequest::default();
        self.errors.clear();
    }

    /// True when every field is empty and there are no errors.
    pub fn is_pristine(&self) -> bool {
        self.request.is_blank() && self.errors.is_empty()
    }
}
