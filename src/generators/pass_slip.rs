//! Generator for the pass slip application document.
//!
//! Lays out a validated request on a single A4 page and renders it with the
//! lopdf engine. The filename is derived from the applicant's full name.

use chrono::NaiveDate;

use super::common::{format_short_date, slip_filename, today};
use super::engine::LopdfRenderEngine;
use super::layout::{layout_pass_slip, SECTION_TITLE};
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError};
use crate::form::ApplicationRequest;

/// Generator for pass slip PDFs.
#[derive(Debug, Clone, Default)]
pub struct PassSlipGenerator {
    date_override: Option<NaiveDate>,
}

impl PassSlipGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always print `date` in the footer instead of today's date.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            date_override: Some(date),
        }
    }

    /// Generate the document with `date` in the footer.
    pub fn generate_on(
        &self,
        request: &ApplicationRequest,
        date: NaiveDate,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let generated_on = format_short_date(date);
        let layout = layout_pass_slip(request, &generated_on);
        let title = format!("{SECTION_TITLE} - {}", request.full_name.trim());
        let pdf = LopdfRenderEngine::render(&layout, &title)?;
        let filename = slip_filename(&request.full_name);

        log::info!("Generated {} ({} bytes)", filename, pdf.len());

        Ok(GeneratedDocument {
            filename,
            pdf,
            generated_on,
        })
    }
}

impl Generator<ApplicationRequest> for PassSlipGenerator {
    fn generate(&self, request: &ApplicationRequest) -> Result<GeneratedDocument, GeneratorError> {
        let date = self.date_override.unwrap_or_else(today);
        self.generate_on(request, date)
    }
}
