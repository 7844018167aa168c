//! Run drivers.
//!
//! A run parses the input file, builds the network once, then either
//! validates the file's embedded assertions ([`RunMode::Assert`]) or computes
//! every requested source/target pair and writes the results
//! ([`RunMode::Batch`]).

mod assertions;
mod batch;
mod config;
mod run;

pub use assertions::{validate_assertions, OPERATOR};
pub use batch::{compute_results, run_batch, write_results};
pub use config::{RunConfig, RunMode, DEFAULT_OUTPUT};
pub use run::{run, RunOutcome};
