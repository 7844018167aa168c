//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! All edge weights are non-negative by construction ([`Hard`] rejects
//! negatives), so a binary-heap Dijkstra is exact.
//!
//! # Tie-breaking
//!
//! When two paths to a vertex have equal weight, the one discovered first
//! wins: edges are relaxed in insertion order, a predecessor is replaced only
//! on a strictly shorter distance, and heap entries of equal distance pop in
//! vertex insertion order. The result is deterministic for a given file.
//!
//! [`Hard`]: crate::models::Hard

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::warn;

use super::{Network, VertexId};

/// A shortest path through the network.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<'g> {
    /// Vertex names from source to target.
    pub vertices: Vec<&'g str>,
    /// Accumulated edge weight.
    pub total_weight: f64,
}

impl WeightedPath<'_> {
    /// Number of edges along the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns `true` for the trivial path from a vertex to itself.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copies of the vertex names.
    pub fn to_owned_vertices(&self) -> Vec<String> {
        self.vertices.iter().map(|v| v.to_string()).collect()
    }
}

/// Heap entry ordered by distance (lower distance = higher priority).
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: VertexId,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Distances and predecessors from one source to every vertex.
///
/// Computed once per source; answers any number of target queries.
///
/// # Examples
///
/// ```
/// use hard_route::graph::{Digraph, Network};
/// use hard_route::models::Hard;
///
/// let mut net = Network::new();
/// net.add_edge("ME", "Lisa", Hard::new(33.0).unwrap());
/// net.add_edge("ME", "John", Hard::new(55.0).unwrap());
/// net.add_edge("Lisa", "John", Hard::new(3.0).unwrap());
///
/// let paths = net.shortest_paths_from("ME");
/// let p = paths.path_to("John").unwrap();
/// assert_eq!(p.vertices, vec!["ME", "Lisa", "John"]);
/// assert_eq!(p.total_weight, 36.0);
/// assert!(paths.path_to("Nobody").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    network: &'g Network,
    distance: Vec<f64>,
    predecessor: Vec<Option<VertexId>>,
}

impl<'g> ShortestPaths<'g> {
    /// Runs Dijkstra from the named source.
    ///
    /// An unknown source yields a result in which nothing is reachable.
    pub fn compute(network: &'g Network, source: &str) -> Self {
        let n = network.num_vertices();
        let mut distance = vec![f64::INFINITY; n];
        let mut predecessor = vec![None; n];

        let Some(s) = network.vertex_id(source) else {
            warn!(source, "source is not part of the network");
            return Self {
                network,
                distance,
                predecessor,
            };
        };

        distance[s] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry {
            vertex: s,
            distance: 0.0,
        });

        while let Some(HeapEntry { vertex: u, distance: d }) = heap.pop() {
            // Stale entry: a shorter distance was already settled.
            if d > distance[u] {
                continue;
            }
            for edge in network.outgoing(u) {
                let candidate = d + edge.weight;
                if candidate < distance[edge.target] {
                    distance[edge.target] = candidate;
                    predecessor[edge.target] = Some(u);
                    heap.push(HeapEntry {
                        vertex: edge.target,
                        distance: candidate,
                    });
                }
            }
        }

        Self {
            network,
            distance,
            predecessor,
        }
    }

    /// Shortest distance to `target`, `None` if unreachable or unknown.
    pub fn distance_to(&self, target: &str) -> Option<f64> {
        let t = self.network.vertex_id(target)?;
        let d = self.distance[t];
        d.is_finite().then_some(d)
    }

    /// Returns `true` if `target` is reachable from the source.
    pub fn has_path(&self, target: &str) -> bool {
        self.distance_to(target).is_some()
    }

    /// The shortest path to `target`, `None` if unreachable or unknown.
    pub fn path_to(&self, target: &str) -> Option<WeightedPath<'g>> {
        let t = self.network.vertex_id(target)?;
        let total_weight = self.distance[t];
        if !total_weight.is_finite() {
            return None;
        }

        let mut vertices = vec![self.network.name(t)];
        let mut current = t;
        while let Some(p) = self.predecessor[current] {
            vertices.push(self.network.name(p));
            current = p;
        }
        vertices.reverse();

        Some(WeightedPath {
            vertices,
            total_weight,
        })
    }
}
