//! # hard-route
//!
//! Shipping cost projection over a weighted relationship network.
//!
//! A network file lists parties and the `HARD` distance to each of their
//! contacts. The crate builds a directed weighted multigraph from it,
//! computes shortest paths with Dijkstra's algorithm, and turns a path's
//! accumulated distance into a shipping cost for a given package. Files may
//! embed expected costs as `@` assertions, which an assertion run verifies.
//!
//! ## Modules
//!
//! - [`models`] — Value types (Dimensions, PackageProfile, Hard, lines, results)
//! - [`cost`] — Volumetric weight, normalized weight, and shipping cost formulas
//! - [`parse`] — Data-line and assertion-line parsing
//! - [`graph`] — Multigraph construction and shortest paths
//! - [`job`] — Batch and assertion run drivers
//! - [`error`] — Error types

pub mod cost;
pub mod error;
pub mod graph;
pub mod job;
pub mod models;
pub mod parse;
pub mod timing;

pub use error::{AssertionFailure, FormatError, LineError, RunError};
pub use job::{run, RunConfig, RunMode, RunOutcome};
