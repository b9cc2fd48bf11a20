//! Traits for generator system standardization.

use super::{GeneratedDocument, GeneratorError};
use crate::form::ValidationErrors;

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object. An empty set means valid.
    fn validate(&self) -> ValidationErrors;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: &Req) -> Result<GeneratedDocument, GeneratorError>;
}
