//! Run configuration.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cost::parse_profile;
use crate::error::RunError;
use crate::models::PackageProfile;

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Whether a run validates embedded assertions or writes batch output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunMode {
    /// Compute all requested pairs and write them to the output file.
    #[default]
    Batch,
    /// Check the input's `@` lines against computed costs from `ME`.
    Assert,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Batch => f.write_str("WITHOUT_ASSERTIONS"),
            RunMode::Assert => f.write_str("WITH_ASSERTIONS"),
        }
    }
}

/// Parameters of a single run.
///
/// # Examples
///
/// ```
/// use hard_route::job::{RunConfig, RunMode};
///
/// let config = RunConfig::new("network.csv")
///     .with_source("ME")
///     .with_profile("10x9x5x1200".parse().unwrap());
/// assert_eq!(config.mode, RunMode::Batch);
/// assert_eq!(config.output.to_str(), Some("output.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Network file to read.
    pub input: PathBuf,
    /// File that batch results replace.
    pub output: PathBuf,
    /// Single source to compute from; all vertices when `None`.
    pub source: Option<String>,
    /// Single target to compute to; all vertices when `None`.
    pub target: Option<String>,
    /// Package to cost paths for; raw distances when `None`.
    pub profile: Option<PackageProfile>,
    /// Run mode.
    pub mode: RunMode,
}

impl RunConfig {
    /// Creates a batch configuration for `input` with default output.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            source: None,
            target: None,
            profile: None,
            mode: RunMode::Batch,
        }
    }

    /// Sets the output file.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Restricts the run to one source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Restricts the run to one target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Costs every path for the given package.
    pub fn with_profile(mut self, profile: PackageProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Parses a `WxLxHxGrams` description and costs every path for it.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Format`] when the description is malformed.
    pub fn with_dimensions(self, raw: &str) -> Result<Self, RunError> {
        let profile = parse_profile(raw)?;
        Ok(self.with_profile(profile))
    }

    /// Sets the run mode.
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Logs the effective parameters.
    pub fn log_parameters(&self) {
        info!("input file: {:?}", self.input.display().to_string());
        info!("output file: {:?}", self.output.display().to_string());
        if let Some(source) = &self.source {
            info!("source: {:?}", source);
        }
        if let Some(target) = &self.target {
            info!("target: {:?}", target);
        }
        if let Some(profile) = &self.profile {
            info!("dimensions: {}", profile);
        }
        info!("running {} mode", self.mode);
    }
}
