#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use pass_slip::form::{FieldEdit, FormState, Rank, TimeOfDay};
use pass_slip::generators::{GeneratedDocument, PassSlipGenerator};
use pass_slip::pipeline::{NoDelay, SubmissionPipeline};
use pass_slip::storage::{ArtifactSink, SavedArtifact, StorageError};

/// In-memory sink recording every saved document.
#[derive(Clone, Default)]
pub struct MemorySink {
    saved: Arc<tokio::sync::Mutex<Vec<GeneratedDocument>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn saved(&self) -> Vec<GeneratedDocument> {
        self.saved.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.saved.lock().await.len()
    }
}

#[async_trait::async_trait]
impl ArtifactSink for MemorySink {
    async fn save(&self, document: &GeneratedDocument) -> Result<SavedArtifact, StorageError> {
        self.saved.lock().await.push(document.clone());
        Ok(SavedArtifact {
            filename: document.filename.clone(),
            location: PathBuf::from("memory").join(&document.filename),
        })
    }
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Pipeline rendering real PDFs into a [`MemorySink`], without a delay.
pub fn memory_pipeline() -> (SubmissionPipeline, MemorySink) {
    let sink = MemorySink::new();
    let pipeline = SubmissionPipeline::new(
        Arc::new(PassSlipGenerator::with_date(fixed_date())),
        Arc::new(sink.clone()),
        Arc::new(NoDelay),
    );
    (pipeline, sink)
}

/// A form with every required field filled and no reason.
pub fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.set_field(FieldEdit::FullName("Juan Dela Cruz".into()));
    form.set_field(FieldEdit::Rank(Some(Rank::TeacherIII)));
    form.set_field(FieldEdit::TimeOut(TimeOfDay::new(13, 30)));
    form.set_field(FieldEdit::TimeReturn(TimeOfDay::new(15, 0)));
    form.set_field(FieldEdit::PlacesToVisit("Division Office".into()));
    form
}
