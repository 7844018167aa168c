//! Command-line entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use hard_route::job::{run, RunConfig, RunMode, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "hard-route")]
#[command(about = "Shortest paths and shipping costs over a relationship network")]
struct Args {
    /// Network file (data lines and optional `@` assertion lines)
    #[arg(long)]
    input: PathBuf,

    /// File that batch results replace
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Compute from this party only
    #[arg(long)]
    source: Option<String>,

    /// Compute to this party only
    #[arg(long)]
    target: Option<String>,

    /// Package as WxLxHxWeight (cm, cm, cm, grams); reports costs instead of weights
    #[arg(long)]
    dimensions: Option<String>,

    /// Validate the input's embedded assertions instead of writing output
    #[arg(long = "assert")]
    assert_mode: bool,

    /// Log per-edge detail
    #[arg(short, long)]
    verbose: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        let mode = if self.assert_mode {
            RunMode::Assert
        } else {
            RunMode::Batch
        };
        let mut config = RunConfig::new(self.input)
            .with_output(self.output)
            .with_mode(mode);
        if let Some(source) = non_empty(self.source) {
            config = config.with_source(source);
        }
        if let Some(target) = non_empty(self.target) {
            config = config.with_target(target);
        }
        if let Some(raw) = non_empty(self.dimensions) {
            config = config
                .with_dimensions(&raw)
                .with_context(|| format!("invalid --dimensions {raw:?}"))?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = args.into_config()?;
    if let Err(e) = run(&config) {
        error!("run failed: {}", e);
        return Err(e.into());
    }
    Ok(())
}
