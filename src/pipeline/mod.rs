//! Validate-and-render pipeline.
//!
//! An explicit Idle/Submitting state machine. The pause between accepting a
//! submission and rendering it is an injectable [`SubmitDelay`], so tests can
//! drive the pipeline without a timer.

pub mod delay;
pub mod submission;

pub use delay::{NoDelay, SubmitDelay, TokioDelay};
pub use submission::{
    PipelineState, Submission, SubmissionPipeline, SubmissionReceipt, SubmitOutcome,
    SubmitResult, SUCCESS_MESSAGE,
};

use thiserror::Error;

use crate::generators::GeneratorError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
