//! End-to-end tests: file in, results or assertion verdict out.

use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hard_route::graph::{build_network, Digraph, Network};
use hard_route::job::{compute_results, run, RunConfig, RunMode, RunOutcome};
use hard_route::models::Hard;
use hard_route::parse::read_data_lines;
use hard_route::{AssertionFailure, RunError};

const FRIENDS: &str = "\
ME,Lisa:33,Peter:123,John:55
Lisa,John:3
Diana,Peter:11

@,Lisa,10x9x5x1200,6.89
@,John,26x10x11x500,6.0
@,Peter,26x10x11x500,11.09
@,Diana,6x10x8x1233,~
";

fn write_input(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("network.csv");
    fs::write(&path, content).expect("write input");
    path
}

#[test]
fn test_assertion_run_passes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, FRIENDS);
    let config = RunConfig::new(&input).with_mode(RunMode::Assert);
    assert_eq!(run(&config).expect("assertions hold"), RunOutcome::Assertions(4));
}

#[test]
fn test_assertion_run_reports_first_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!("{FRIENDS}@,Peter,26x10x11x500,99.99\n@,Diana,1x1x1x1,5.0\n");
    let input = write_input(&dir, &content);
    let config = RunConfig::new(&input).with_mode(RunMode::Assert);
    match run(&config) {
        Err(RunError::Assertion(AssertionFailure::Mismatch { target, .. })) => {
            assert_eq!(target, "Peter");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn test_assertion_run_survives_bad_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = "\
ME,Lisa:33
ME,Lisa:-5
Lisa,ME,John:2
@,Lisa,10x9x5
@,Lisa,10x9x5x1200,6.89
";
    let input = write_input(&dir, content);
    let config = RunConfig::new(&input).with_mode(RunMode::Assert);
    assert_eq!(run(&config).expect("valid lines only"), RunOutcome::Assertions(1));
}

#[test]
fn test_batch_run_with_profile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, FRIENDS);
    let output = dir.path().join("costs.csv");
    let config = RunConfig::new(&input)
        .with_output(&output)
        .with_source("ME")
        .with_profile("26x10x11x500".parse().expect("valid"));
    run(&config).expect("batch run");

    let written = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[ME -> Lisa] - [Cost: 5.74]",
            "[ME -> Peter] - [Cost: 11.09]",
            "[ME -> Lisa -> John] - [Cost: 6.0]",
        ]
    );
}

#[test]
fn test_batch_run_blank_file_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, "\n\n@,Lisa,1x1x1x1,~\n");
    let output = dir.path().join("out.csv");
    let config = RunConfig::new(&input).with_output(&output);
    assert_eq!(run(&config).expect("no-op"), RunOutcome::Batch(Vec::new()));
    assert!(!output.exists());
}

/// All-pairs reference distances by Floyd-Warshall.
fn floyd_warshall(network: &Network) -> Vec<Vec<f64>> {
    let n = network.num_vertices();
    let mut d = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for e in network.edges() {
        if e.weight < d[e.source][e.target] {
            d[e.source][e.target] = e.weight;
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = d[i][k] + d[k][j];
                if via < d[i][j] {
                    d[i][j] = via;
                }
            }
        }
    }
    d
}

#[test]
fn test_dijkstra_matches_floyd_warshall_on_random_multigraphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let n = rng.random_range(2..12);
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let mut net = Network::new();
        for name in &names {
            net.add_vertex(name);
        }
        let edges = rng.random_range(0..n * 3);
        for _ in 0..edges {
            let s = rng.random_range(0..n);
            let t = rng.random_range(0..n);
            let w = f64::from(rng.random_range(0u32..100));
            net.add_edge(&names[s], &names[t], Hard::new(w).expect("non-negative"));
        }

        let reference = floyd_warshall(&net);
        for (i, s) in names.iter().enumerate() {
            let paths = net.shortest_paths_from(s);
            for (j, t) in names.iter().enumerate() {
                let expected = reference[i][j];
                match paths.distance_to(t) {
                    Some(d) => assert_eq!(d, expected, "{s} -> {t}"),
                    None => assert!(expected.is_infinite(), "{s} -> {t}"),
                }
            }
        }
    }
}

#[test]
fn test_batch_results_never_contain_self_pairs() {
    let net = build_network(&read_data_lines("A,A:0,B:2\nB,B:0,A:1\n"));
    let results = compute_results(&net, None, None, None);
    assert_eq!(results.len(), 2);
    for r in &results {
        assert_ne!(r.path().first(), r.path().last());
    }
}

#[test]
fn test_batch_results_print_large_weights_in_scientific_notation() {
    let net = build_network(&read_data_lines("ME,Lisa:10000000\nLisa,John:123456789012\n"));
    let lines: Vec<String> = compute_results(&net, Some("ME"), None, None)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "[ME -> Lisa] - [Weight: 1.0E7]",
            "[ME -> Lisa -> John] - [Weight: 1.23466789012E11]",
        ]
    );
}
