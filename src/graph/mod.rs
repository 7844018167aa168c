//! Directed weighted multigraph and shortest paths.
//!
//! Parties are vertices identified by name; each `TARGET:DISTANCE` element
//! of a data line becomes a directed edge from the line's head. Parallel
//! edges and self-loops are kept as given.

mod dijkstra;
mod network;

pub use dijkstra::{ShortestPaths, WeightedPath};
pub use network::{build_network, Digraph, Edge, EdgeId, Network, VertexId};
