use std::path::PathBuf;
use std::sync::Arc;

use super::delay::{SubmitDelay, TokioDelay};
use super::PipelineError;
use crate::config::PassSlipConfig;
use crate::form::{ApplicationRequest, FormState, ValidationErrors};
use crate::generators::{Generator, PassSlipGenerator};
use crate::storage::{ArtifactSink, DirectorySink};

pub const SUCCESS_MESSAGE: &str =
    "Pass slip application submitted successfully! PDF has been generated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Submitting,
}

/// A validated request waiting to be rendered.
///
/// Only [`SubmissionPipeline::begin`] hands these out.
#[derive(Debug)]
pub struct Submission {
    request: ApplicationRequest,
}

impl Submission {
    pub fn request(&self) -> &ApplicationRequest {
        &self.request
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Valid; the pipeline is now Submitting.
    Accepted(Submission),
    /// Required fields are missing. Nothing was rendered or reset.
    Rejected(ValidationErrors),
    /// A submission is already in flight.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub filename: String,
    pub location: PathBuf,
    pub generated_on: String,
    pub message: &'static str,
}

#[derive(Debug)]
pub enum SubmitResult {
    Completed(SubmissionReceipt),
    Rejected(ValidationErrors),
    Ignored,
}

/// Validate-then-render state machine for one form session.
pub struct SubmissionPipeline {
    state: PipelineState,
    generator: Arc<dyn Generator<ApplicationRequest> + Send + Sync>,
    sink: Arc<dyn ArtifactSink + Send + Sync>,
    delay: Arc<dyn SubmitDelay + Send + Sync>,
}

impl SubmissionPipeline {
    pub fn new(
        generator: Arc<dyn Generator<ApplicationRequest> + Send + Sync>,
        sink: Arc<dyn ArtifactSink + Send + Sync>,
        delay: Arc<dyn SubmitDelay + Send + Sync>,
    ) -> Self {
        Self {
            state: PipelineState::Idle,
            generator,
            sink,
            delay,
        }
    }

    pub fn from_config(config: &PassSlipConfig) -> Self {
        Self::new(
            Arc::new(PassSlipGenerator::new()),
            Arc::new(DirectorySink::new(config.output_dir.clone())),
            Arc::new(TokioDelay(config.submit_delay)),
        )
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == PipelineState::Submitting
    }

    /// Validate the form and, if it passes, enter Submitting.
    pub fn begin(&mut self, form: &mut FormState) -> SubmitOutcome {
        if self.is_submitting() {
            log::debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Ignored;
        }

        let errors = form.validate();
        if !errors.is_empty() {
            log::warn!(
                "Submission rejected, missing: {}",
                errors
                    .fields()
                    .iter()
                    .map(|field| field.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return SubmitOutcome::Rejected(errors);
        }

        self.state = PipelineState::Submitting;
        log::info!("Submission accepted for {}", form.request().full_name.trim());
        SubmitOutcome::Accepted(Submission {
            request: form.request().clone(),
        })
    }

    /// Render and save an accepted submission, then reset the form.
    ///
    /// On failure the pipeline is Idle again and the form keeps its values.
    pub async fn complete(
        &mut self,
        form: &mut FormState,
        submission: Submission,
    ) -> Result<SubmissionReceipt, PipelineError> {
        let result = self.render_and_save(&submission.request).await;
        self.state = PipelineState::Idle;

        match result {
            Ok(receipt) => {
                form.reset();
                Ok(receipt)
            }
            Err(e) => {
                log::error!("Failed to produce pass slip: {}", e);
                Err(e)
            }
        }
    }

    /// Wait out the submit delay, then [`complete`](Self::complete).
    pub async fn finish(
        &mut self,
        form: &mut FormState,
        submission: Submission,
    ) -> Result<SubmissionReceipt, PipelineError> {
        self.delay.wait().await;
        self.complete(form, submission).await
    }

    /// Run the whole submit transition for one trigger.
    pub async fn submit(&mut self, form: &mut FormState) -> Result<SubmitResult, PipelineError> {
        match self.begin(form) {
            SubmitOutcome::Accepted(submission) => {
                let receipt = self.finish(form, submission).await?;
                Ok(SubmitResult::Completed(receipt))
            }
            SubmitOutcome::Rejected(errors) => Ok(SubmitResult::Rejected(errors)),
            SubmitOutcome::Ignored => Ok(SubmitResult::Ignored),
        }
    }

    async fn render_and_save(
        &self,
        request: &ApplicationRequest,
    ) -> Result<SubmissionReceipt, PipelineError> {
        let document = self.generator.generate(request)?;
        let saved = self.sink.save(&document).await?;

        Ok(SubmissionReceipt {
            filename: saved.filename,
            location: saved.location,
            generated_on: document.generated_on,
            message: SUCCESS_MESSAGE,
        })
    }
}
