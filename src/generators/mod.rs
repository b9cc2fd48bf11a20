//! Generators module - business logic for creating the pass slip PDF.
//!
//! - `layout` - fixed positions of every text line on the page
//! - `metrics` - Helvetica glyph widths used to center titles
//! - `engine` - lopdf writer turning a layout into PDF bytes
//! - `pass_slip` - the generator tying request, layout and engine together

pub mod common;
pub mod engine;
pub mod layout;
pub mod metrics;
pub mod pass_slip;
pub mod traits;

pub use engine::LopdfRenderEngine;
pub use layout::{layout_pass_slip, PageLayout, TextLine};
pub use pass_slip::PassSlipGenerator;
pub use traits::{Generator, Validator};

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to encode page content: {0}")]
    Encode(String),
    #[error("failed to write PDF document: {0}")]
    Write(String),
}

/// Result of a successful document generation.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    /// Date printed in the footer.
    pub generated_on: String,
}
