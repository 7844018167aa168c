//! Two-pass file reader: data lines into a network, assertion lines into
//! records.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::error::RunError;
use crate::graph::{build_network, Network};
use crate::job::RunMode;
use crate::models::{AssertionRecord, InputLine};
use crate::timing::format_duration;

use super::line::{
    is_assertion_line, is_data_line, parse_assertion_line, parse_data_line, split_tokens,
};

/// Everything a run needs from its input file.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// The relationship network built from the data lines.
    pub network: Network,
    /// Embedded assertions, in file order. Empty outside assertion mode.
    pub assertions: Vec<AssertionRecord>,
}

/// Reads `path` and builds the network, plus the assertions when `mode` is
/// [`RunMode::Assert`].
pub fn read_input(path: &Path, mode: RunMode) -> Result<ParsedInput, RunError> {
    let content = fs::read_to_string(path).map_err(|e| RunError::io(path, e))?;
    let lines = read_data_lines(&content);
    let network = build_network(&lines);
    info!(
        vertices = network.num_vertices(),
        edges = network.num_edges(),
        "network built"
    );

    let assertions = match mode {
        RunMode::Assert => {
            let content = fs::read_to_string(path).map_err(|e| RunError::io(path, e))?;
            read_assertions(&content)
        }
        RunMode::Batch => Vec::new(),
    };

    Ok(ParsedInput {
        network,
        assertions,
    })
}

/// Parses every data line of `content`.
///
/// Lines with fewer than two tokens are dropped silently. Lines failing
/// validation are logged with their 1-based line number and skipped.
pub fn read_data_lines(content: &str) -> Vec<InputLine> {
    let candidates: Vec<(usize, Vec<&str>)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| is_data_line(line))
        .map(|(i, line)| (i + 1, split_tokens(line)))
        .filter(|(row, tokens)| {
            let keep = tokens.len() > 1;
            if !keep {
                debug!(row, "dropping line without targets");
            }
            keep
        })
        .collect();

    let total = candidates.len();
    info!("Processing {} lines", total);
    let start = Instant::now();

    let mut lines = Vec::with_capacity(total);
    for (row, tokens) in candidates {
        match parse_data_line(&tokens) {
            Ok(line) => lines.push(line),
            Err(e) => error!(
                "Handling line {:?} on row {} failed: {}. Skipping...",
                tokens.join(","),
                row,
                e
            ),
        }
    }

    info!(
        "Processed all {} lines in {}",
        total,
        format_duration(start.elapsed())
    );
    lines
}

/// Parses every assertion line of `content`.
///
/// Lines that do not split into the marker plus three fields are filtered
/// out; lines whose fields fail validation are logged and skipped.
pub fn read_assertions(content: &str) -> Vec<AssertionRecord> {
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if !is_assertion_line(line) {
            continue;
        }
        let row = i + 1;
        let tokens = split_tokens(line);
        if tokens.len() != 4 {
            warn!(row, tokens = tokens.len(), "ignoring assertion line with wrong field count");
            continue;
        }
        match parse_assertion_line(&tokens[1..]) {
            Ok(record) => records.push(record),
            Err(e) => error!("Assertion on row {} is invalid: {}. Skipping...", row, e),
        }
    }
    info!("Loaded {} assertions", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpectedCost;

    const SAMPLE: &str = "\
ME,Lisa:33,Peter:123,John:55
Lisa,John:3

Diana,Peter:11
@,Lisa,10x9x5x1200,6.89
@,Diana,6x10x8x1233,~
";

    #[test]
    fn test_read_data_lines() {
        let lines = read_data_lines(SAMPLE);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].head().name(), "ME");
        assert_eq!(lines[0].targets().len(), 3);
        assert_eq!(lines[2].head().name(), "Diana");
    }

    #[test]
    fn test_read_data_lines_drops_single_token() {
        let lines = read_data_lines("ME\nLisa,\nLisa,John:3\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].head().name(), "Lisa");
    }

    #[test]
    fn test_read_data_lines_skips_invalid() {
        let content = "ME,Lisa\nLisa:3,ME\nME,Lisa:x\nME,Lisa:4\n";
        let lines = read_data_lines(content);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].targets()[0].hard().value(), 4.0);
    }

    #[test]
    fn test_read_assertions() {
        let records = read_assertions(SAMPLE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].target(), "Lisa");
        assert_eq!(records[0].expected(), ExpectedCost::Cost(6.89));
        assert_eq!(records[1].expected(), ExpectedCost::Unreachable);
    }

    #[test]
    fn test_read_assertions_filters_and_skips() {
        let content = "\
@,Lisa,10x9x5x1200
@,Lisa,10x9x5x1200,6.89,extra
@,Lisa,10x9x5,6.89
@,Lisa,10x9x5x1200,abc
@,John,1x1x1x100,1.0
";
        let records = read_assertions(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target(), "John");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Path::new("/definitely/not/here.csv"), RunMode::Batch);
        assert!(matches!(result, Err(RunError::Io { .. })));
    }
}
