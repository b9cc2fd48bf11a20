use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SUBMIT_DELAY_MS must be a whole number of milliseconds, got '{0}'")]
    InvalidDelay(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSlipConfig {
    /// Directory generated PDFs are saved into.
    pub output_dir: PathBuf,
    /// Pause between accepting a submission and rendering it.
    pub submit_delay: Duration,
}

impl Default for PassSlipConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl PassSlipConfig {
    /// Read configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = lookup("PASS_SLIP_OUTPUT_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                log::debug!("PASS_SLIP_OUTPUT_DIR not set, saving to the working directory");
                PathBuf::from(DEFAULT_OUTPUT_DIR)
            });

        let submit_delay = match lookup("SUBMIT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw.clone()))?,
            None => {
                log::debug!("SUBMIT_DELAY_MS not set, using {DEFAULT_SUBMIT_DELAY_MS}ms");
                Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS)
            }
        };

        Ok(Self {
            output_dir,
            submit_delay,
        })
    }
}
