use std::io;

use anyhow::Context;

pub mod config;
pub mod form;
pub mod generators;
pub mod pipeline;
pub mod storage;
pub mod terminal;


pub use crate::config::PassSlipConfig;
pub use crate::form::{ApplicationRequest, FormState};
pub use crate::pipeline::SubmissionPipeline;

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PassSlipConfig::from_env().context("invalid pass slip configuration")?;
    log::info!(
        "Saving pass slips to {} (submit delay {} ms)",
        config.output_dir.display(),
        config.submit_delay.as_millis()
    );

    let mut form = FormState::new();
    let mut pipeline = SubmissionPipeline::from_config(&config);
    let mut surface = terminal::TerminalForm::new(io::stdin().lock(), io::stdout().lock());

    let summary = surface
        .run_session(&mut form, &mut pipeline)
        .await
        .context("pass slip session failed")?;

    log::info!("Session ended after {} submission(s)", summary.submitted());
    Ok(())
}
