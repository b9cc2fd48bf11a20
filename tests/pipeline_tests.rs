mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{filled_form, memory_pipeline};
use pass_slip::form::{Field, FieldEdit};
use pass_slip::generators::{layout_pass_slip, PassSlipGenerator};
use pass_slip::pipeline::{
    PipelineState, SubmissionPipeline, SubmitOutcome, SubmitResult, TokioDelay, SUCCESS_MESSAGE,
};
use pass_slip::storage::DirectorySink;

fn blank(field: Field) -> FieldEdit {
    match field {
        Field::FullName => FieldEdit::FullName("   ".into()),
        Field::Rank => FieldEdit::Rank(None),
        Field::TimeOut => FieldEdit::TimeOut(None),
        Field::TimeReturn => FieldEdit::TimeReturn(None),
        Field::PlacesToVisit => FieldEdit::PlacesToVisit("\n\t ".into()),
        Field::ReasonForVisit => FieldEdit::ReasonForVisit(String::new()),
    }
}

#[tokio::test]
async fn test_each_missing_required_field_blocks_render() {
    for field in Field::ALL.into_iter().filter(|field| field.is_required()) {
        let (mut pipeline, sink) = memory_pipeline();
        let mut form = filled_form();
        form.set_field(blank(field));

        let result = pipeline.submit(&mut form).await.unwrap();

        let SubmitResult::Rejected(errors) = result else {
            panic!("expected {field:?} to be rejected");
        };
        assert_eq!(errors.fields(), vec![field]);
        assert_eq!(form.errors().fields(), vec![field]);
        assert_eq!(sink.count().await, 0);
        assert_eq!(pipeline.state(), PipelineState::Idle);
        assert!(!form.request().is_blank());
    }
}

#[tokio::test]
async fn test_valid_submission_without_reason() {
    let (mut pipeline, sink) = memory_pipeline();
    let mut form = filled_form();
    let snapshot = form.request().clone();

    let result = pipeline.submit(&mut form).await.unwrap();

    let SubmitResult::Completed(receipt) = result else {
        panic!("expected the submission to complete");
    };
    assert_eq!(receipt.filename, "pass-slip-juan-dela-cruz.pdf");
    assert_eq!(receipt.generated_on, "10/18/2026");
    assert_eq!(receipt.message, SUCCESS_MESSAGE);

    let saved = sink.saved().await;
    assert_eq!(saved.len(), 1);
    assert!(saved[0].pdf.starts_with(b"%PDF"));

    let layout = layout_pass_slip(&snapshot, &receipt.generated_on);
    assert!(layout.texts().all(|text| !text.starts_with("Reason(s) for Visit")));
}

#[tokio::test]
async fn test_success_resets_every_field_and_error() {
    let (mut pipeline, _sink) = memory_pipeline();
    let mut form = filled_form();
    form.set_field(FieldEdit::ReasonForVisit("Submit documents".into()));

    pipeline.submit(&mut form).await.unwrap();

    assert!(form.is_pristine());
    assert!(form.request().rank.is_none());
    assert!(form.request().reason_for_visit.is_empty());
}

#[tokio::test]
async fn test_trigger_during_submitting_renders_once() {
    let (mut pipeline, sink) = memory_pipeline();
    let mut form = filled_form();

    let SubmitOutcome::Accepted(submission) = pipeline.begin(&mut form) else {
        panic!("expected acceptance");
    };
    for _ in 0..3 {
        assert!(matches!(pipeline.begin(&mut form), SubmitOutcome::Ignored));
    }
    pipeline.finish(&mut form, submission).await.unwrap();

    assert_eq!(sink.count().await, 1);
    assert!(!pipeline.is_submitting());
}

#[tokio::test]
async fn test_rejected_submission_then_fix_and_resubmit() {
    let (mut pipeline, sink) = memory_pipeline();
    let mut form = filled_form();
    form.set_field(FieldEdit::Rank(None));
    form.set_field(FieldEdit::TimeOut(None));

    assert!(matches!(
        pipeline.submit(&mut form).await.unwrap(),
        SubmitResult::Rejected(_)
    ));
    form.set_field(FieldEdit::Rank("Principal".parse().ok()));
    assert_eq!(form.errors().fields(), vec![Field::TimeOut]);
    form.set_field(FieldEdit::TimeOut("07:45".parse().ok()));

    assert!(matches!(
        pipeline.submit(&mut form).await.unwrap(),
        SubmitResult::Completed(_)
    ));
    assert_eq!(sink.count().await, 1);
}

#[tokio::test]
async fn test_directory_pipeline_writes_pdf_after_delay() {
    let temp = tempfile::tempdir().unwrap();
    let mut pipeline = SubmissionPipeline::new(
        Arc::new(PassSlipGenerator::new()),
        Arc::new(DirectorySink::new(temp.path())),
        Arc::new(TokioDelay(Duration::from_millis(10))),
    );
    let mut form = filled_form();

    let SubmitResult::Completed(receipt) = pipeline.submit(&mut form).await.unwrap() else {
        panic!("expected the submission to complete");
    };

    assert_eq!(receipt.location, temp.path().join("pass-slip-juan-dela-cruz.pdf"));
    let bytes = std::fs::read(&receipt.location).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

async fn submit_to_directory(full_name: &str, root: &std::path::Path) -> SubmitResult {
    let mut pipeline = SubmissionPipeline::new(
        Arc::new(PassSlipGenerator::with_date(common::fixed_date())),
        Arc::new(DirectorySink::new(root)),
        Arc::new(pass_slip::pipeline::NoDelay),
    );
    let mut form = filled_form();
    form.set_field(FieldEdit::FullName(full_name.into()));
    pipeline.submit(&mut form).await.unwrap()
}

#[tokio::test]
async fn test_receipt_names_the_file_actually_written() {
    let temp = tempfile::tempdir().unwrap();

    let SubmitResult::Completed(receipt) = submit_to_directory("Ana/Reyes", temp.path()).await
    else {
        panic!("expected the submission to complete");
    };

    assert_eq!(receipt.filename, "pass-slip-anareyes.pdf");
    assert!(receipt.location.ends_with(&receipt.filename));
    assert!(receipt.location.exists());
}

#[tokio::test]
async fn test_very_long_name_still_saves_a_pdf() {
    let temp = tempfile::tempdir().unwrap();
    let full_name = vec!["Maria"; 60].join(" ");

    let SubmitResult::Completed(receipt) = submit_to_directory(&full_name, temp.path()).await
    else {
        panic!("expected the submission to complete");
    };

    assert!(receipt.filename.ends_with(".pdf"));
    assert_eq!(
        receipt.location.extension().and_then(|e| e.to_str()),
        Some("pdf")
    );
    assert!(receipt.location.ends_with(&receipt.filename));
    let bytes = std::fs::read(&receipt.location).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
