//! End-to-end run driver.

use std::time::Instant;

use tracing::info;

use crate::error::RunError;
use crate::models::ResultLine;
use crate::parse::read_input;
use crate::timing::format_duration;

use super::{run_batch, validate_assertions, RunConfig, RunMode};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Batch mode: the lines written to the output file.
    Batch(Vec<ResultLine>),
    /// Assertion mode: the number of assertions verified.
    Assertions(usize),
}

/// Executes one full pass over the configured input.
///
/// # Errors
///
/// Returns [`RunError::Io`] if the input cannot be read or the output cannot
/// be written, and [`RunError::Assertion`] on the first failed assertion.
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    info!("Application starting");
    config.log_parameters();
    let start = Instant::now();

    let parsed = read_input(&config.input, config.mode)?;
    let outcome = match config.mode {
        RunMode::Batch => RunOutcome::Batch(run_batch(&parsed.network, config)?),
        RunMode::Assert => {
            RunOutcome::Assertions(validate_assertions(&parsed.network, &parsed.assertions)?)
        }
    };

    info!("Application completed in {}", format_duration(start.elapsed()));
    Ok(outcome)
}
