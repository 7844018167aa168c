//! Batch computation over source/target pairs.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::cost::shipping_cost;
use crate::error::RunError;
use crate::graph::{Digraph, Network};
use crate::models::{PackageProfile, ResultLine, ValueLabel};

use super::RunConfig;

/// Computes one result line per reachable `(source, target)` pair.
///
/// `None` for `source` or `target` means every vertex. Pairs with
/// `source == target` are always skipped. Sources form the outer loop and
/// targets the inner loop, both in vertex insertion order.
pub fn compute_results(
    network: &Network,
    source: Option<&str>,
    target: Option<&str>,
    profile: Option<&PackageProfile>,
) -> Vec<ResultLine> {
    let sources: Vec<&str> = match source {
        Some(s) => vec![s],
        None => network.vertices().collect(),
    };
    let targets: Vec<&str> = match target {
        Some(t) => vec![t],
        None => network.vertices().collect(),
    };
    info!("Start calculating the graph for sources {:?}", sources);

    let mut results = Vec::new();
    for &s in &sources {
        let paths = network.shortest_paths_from(s);
        for &t in &targets {
            if s == t {
                continue;
            }
            let Some(path) = paths.path_to(t) else {
                continue;
            };
            let (value, label) = match profile {
                Some(p) => (shipping_cost(path.total_weight, p), ValueLabel::Cost),
                None => (path.total_weight, ValueLabel::Weight),
            };
            let line = ResultLine::new(path.to_owned_vertices(), value, label);
            info!("{}", line);
            results.push(line);
        }
    }
    results
}

/// Replaces the content of `path` with one line per result.
pub fn write_results(path: &Path, results: &[ResultLine]) -> Result<(), RunError> {
    let mut content = String::new();
    for line in results {
        content.push_str(&line.to_string());
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| RunError::io(path, e))
}

/// Runs batch mode: computes the configured pairs and writes the output.
///
/// A network without vertices or without edges is a no-op: nothing is
/// written and an empty result is returned.
pub fn run_batch(network: &Network, config: &RunConfig) -> Result<Vec<ResultLine>, RunError> {
    if network.is_empty() {
        warn!("Graph contains no vertices...exiting");
        return Ok(Vec::new());
    }
    if network.num_edges() == 0 {
        warn!("Graph with no edges between vertices");
        return Ok(Vec::new());
    }

    let results = compute_results(
        network,
        config.source.as_deref(),
        config.target.as_deref(),
        config.profile.as_ref(),
    );
    write_results(&config.output, &results)?;
    info!(
        "Wrote {} lines to {}",
        results.len(),
        config.output.display()
    );
    Ok(results)
}
