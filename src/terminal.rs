//! Line-oriented presentation surface for the pass slip form.
//!
//! Prompts for each field, rejects ranks and times it cannot parse before
//! they reach the form, and shows field errors and the busy state while a
//! submission is processed.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::form::{Field, FieldEdit, FormState, Rank, TimeOfDay, ValidationErrors};
use crate::generators::layout::{ORGANIZATION_NAME, ORGANIZATION_SHORT_NAME, SYSTEM_NAME};
use crate::pipeline::{PipelineError, SubmissionPipeline, SubmissionReceipt, SubmitOutcome};

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// What happened during one interactive session.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub receipts: Vec<SubmissionReceipt>,
}

impl SessionSummary {
    pub fn submitted(&self) -> usize {
        self.receipts.len()
    }
}

pub struct TerminalForm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalForm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Collect and submit applications until the user stops or input ends.
    pub async fn run_session(
        &mut self,
        form: &mut FormState,
        pipeline: &mut SubmissionPipeline,
    ) -> Result<SessionSummary, TerminalError> {
        let mut summary = SessionSummary::default();
        self.print_banner()?;

        'applications: loop {
            writeln!(self.output, "\nPass Slip Application Form")?;
            let mut pending = Field::ALL.to_vec();

            loop {
                if !self.fill_fields(form, &pending)? {
                    break 'applications;
                }

                match pipeline.begin(form) {
                    SubmitOutcome::Rejected(errors) => {
                        self.show_errors(&errors)?;
                        pending = errors.fields();
                    }
                    SubmitOutcome::Ignored => {
                        log::warn!("Submit triggered while another submission is in flight");
                        break 'applications;
                    }
                    SubmitOutcome::Accepted(submission) => {
                        writeln!(self.output, "\nProcessing Application...")?;
                        self.output.flush()?;

                        let receipt = pipeline.finish(form, submission).await?;
                        writeln!(self.output, "{}", receipt.message)?;
                        writeln!(self.output, "Saved to {}", receipt.location.display())?;
                        summary.receipts.push(receipt);
                        break;
                    }
                }
            }

            if !self.confirm("\nFile another application? [y/N]: ")? {
                break;
            }
        }

        Ok(summary)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{ORGANIZATION_SHORT_NAME}")?;
        writeln!(self.output, "{ORGANIZATION_NAME} - {SYSTEM_NAME}")
    }

    /// Prompt for `fields` in order. Returns false when input ends.
    fn fill_fields(&mut self, form: &mut FormState, fields: &[Field]) -> io::Result<bool> {
        for &field in fields {
            writeln!(self.output)?;
            if let Some(error) = form.error_for(field) {
                writeln!(self.output, "  ! {error}")?;
            }

            let edit = match field {
                Field::FullName => {
                    writeln!(
                        self.output,
                        "Enter your complete name: First Name, Middle Initial, Surname"
                    )?;
                    self.prompt_line(&heading(field, "e.g., Juan M. Dela Cruz"))?
                        .map(FieldEdit::FullName)
                }
                Field::Rank => self.prompt_rank()?.map(FieldEdit::Rank),
                Field::TimeOut => self.prompt_time(field)?.map(FieldEdit::TimeOut),
                Field::TimeReturn => self.prompt_time(field)?.map(FieldEdit::TimeReturn),
                Field::PlacesToVisit => self
                    .prompt_block(&heading(field, "e.g., Division Office, District Office, etc."))?
                    .map(FieldEdit::PlacesToVisit),
                Field::ReasonForVisit => self
                    .prompt_block(&heading(field, "e.g., Attend meeting, Submit documents, etc."))?
                    .map(FieldEdit::ReasonForVisit),
            };

            match edit {
                Some(edit) => form.set_field(edit),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    fn show_errors(&mut self, errors: &ValidationErrors) -> io::Result<()> {
        writeln!(self.output, "\nPlease fix the following before submitting:")?;
        for error in errors.iter() {
            writeln!(self.output, "  - {}: {}", error.field().label(), error)?;
        }
        Ok(())
    }

    /// `None` = selector left empty; outer `None` = input ended.
    fn prompt_rank(&mut self) -> io::Result<Option<Option<Rank>>> {
        writeln!(self.output, "{}", heading(Field::Rank, "Select your rank"))?;
        for (i, rank) in Rank::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, rank)?;
        }

        loop {
            let Some(line) = self.prompt_line("> ")? else {
                return Ok(None);
            };
            let choice = line.trim();
            if choice.is_empty() {
                return Ok(Some(None));
            }
            if let Ok(number) = choice.parse::<usize>() {
                match number.checked_sub(1).and_then(|i| Rank::ALL.get(i).copied()) {
                    Some(rank) => return Ok(Some(Some(rank))),
                    None => {
                        writeln!(self.output, "  Choose a number from 1 to {}", Rank::ALL.len())?;
                        continue;
                    }
                }
            }
            match choice.parse::<Rank>() {
                Ok(rank) => return Ok(Some(Some(rank))),
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }

    fn prompt_time(&mut self, field: Field) -> io::Result<Option<Option<TimeOfDay>>> {
        let prompt = heading(field, "HH:MM");
        loop {
            let Some(line) = self.prompt_line(&prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(None));
            }
            match line.parse::<TimeOfDay>() {
                Ok(time) => return Ok(Some(Some(time))),
                Err(e) => writeln!(self.output, "  {e}, e.g. 13:30")?,
            }
        }
    }

    /// Multi-line entry finished by an empty line.
    fn prompt_block(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        writeln!(self.output, "(finish with an empty line)")?;

        let mut lines = Vec::new();
        loop {
            match self.prompt_line("| ")? {
                Some(line) if line.is_empty() => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => return Ok(None),
                None => break,
            }
        }
        Ok(Some(lines.join("\n")))
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt_line(prompt)?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn heading(field: Field, hint: &str) -> String {
    let marker = if field.is_required() { "*" } else { "(Optional)" };
    format!("{} {} [{}]: ", field.label(), marker, hint)
}
