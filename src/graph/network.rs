//! Adjacency-list multigraph keyed by party name.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Hard, InputLine};

use super::ShortestPaths;

/// Index of a vertex in insertion order.
pub type VertexId = usize;

/// Index of an edge in insertion order.
pub type EdgeId = usize;

/// A directed weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Tail vertex.
    pub source: VertexId,
    /// Head vertex.
    pub target: VertexId,
    /// Non-negative weight.
    pub weight: f64,
}

/// The operations a weighted digraph offers to the run drivers.
pub trait Digraph {
    /// Adds a vertex if absent and returns its id.
    fn add_vertex(&mut self, name: &str) -> VertexId;

    /// Adds a directed edge, creating either endpoint if absent.
    fn add_edge(&mut self, source: &str, target: &str, weight: Hard) -> EdgeId;

    /// Runs a single-source shortest path pass from `source`.
    fn shortest_paths_from(&self, source: &str) -> ShortestPaths<'_>;
}

/// A directed weighted multigraph of named parties.
///
/// Vertices keep the order in which they were first referenced.
///
/// # Examples
///
/// ```
/// use hard_route::graph::{Digraph, Network};
/// use hard_route::models::Hard;
///
/// let mut net = Network::new();
/// net.add_edge("ME", "Lisa", Hard::new(33.0).unwrap());
/// net.add_edge("ME", "Lisa", Hard::new(40.0).unwrap());
/// assert_eq!(net.num_vertices(), 2);
/// assert_eq!(net.num_edges(), 2);
/// assert_eq!(net.vertices().collect::<Vec<_>>(), vec!["ME", "Lisa"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a vertex by name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// The name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn name(&self, id: VertexId) -> &str {
        &self.names[id]
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing[id].iter().map(move |&e| &self.edges[e])
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.names.len()
    }

    /// Number of edges, parallel edges counted individually.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the network has no vertices.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adds every edge of a validated line: head to each target.
    pub fn add_line(&mut self, line: &InputLine) {
        let head = line.head().name();
        self.add_vertex(head);
        for target in line.targets() {
            self.add_edge(head, target.name(), target.hard());
        }
    }
}

impl Digraph for Network {
    fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.vertex_id(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    fn add_edge(&mut self, source: &str, target: &str, weight: Hard) -> EdgeId {
        let s = self.add_vertex(source);
        let t = self.add_vertex(target);
        let id = self.edges.len();
        self.edges.push(Edge {
            source: s,
            target: t,
            weight: weight.value(),
        });
        self.outgoing[s].push(id);
        debug!(source, target, weight = weight.value(), "edge added");
        id
    }

    fn shortest_paths_from(&self, source: &str) -> ShortestPaths<'_> {
        ShortestPaths::compute(self, source)
    }
}

/// Folds validated lines into a network.
pub fn build_network<'a, I>(lines: I) -> Network
where
    I: IntoIterator<Item = &'a InputLine>,
{
    lines.into_iter().fold(Network::new(), |mut net, line| {
        net.add_line(line);
        net
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_data_line, split_tokens};

    fn line(raw: &str) -> InputLine {
        parse_data_line(&split_tokens(raw)).expect("valid line")
    }

    fn hard(v: f64) -> Hard {
        Hard::new(v).expect("valid")
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut net = Network::new();
        let a = net.add_vertex("A");
        let b = net.add_vertex("B");
        assert_eq!(net.add_vertex("A"), a);
        assert_ne!(a, b);
        assert_eq!(net.num_vertices(), 2);
        assert_eq!(net.name(b), "B");
    }

    #[test]
    fn test_add_edge_creates_vertices() {
        let mut net = Network::new();
        net.add_edge("A", "B", hard(3.0));
        assert_eq!(net.num_vertices(), 2);
        assert_eq!(net.num_edges(), 1);
        let a = net.vertex_id("A").expect("exists");
        let out: Vec<_> = net.outgoing(a).collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].weight, 3.0);
        assert_eq!(net.name(out[0].target), "B");
    }

    #[test]
    fn test_parallel_edges_and_self_loops_kept() {
        let mut net = Network::new();
        net.add_edge("A", "B", hard(3.0));
        net.add_edge("A", "B", hard(3.0));
        net.add_edge("A", "A", hard(0.0));
        assert_eq!(net.num_edges(), 3);
        assert_eq!(net.num_vertices(), 2);
    }

    #[test]
    fn test_build_network() {
        let lines = vec![
            line("ME,Lisa:33,Peter:123,John:55"),
            line("Lisa,John:3"),
            line("Diana,Peter:11"),
        ];
        let net = build_network(&lines);
        assert_eq!(net.num_vertices(), 5);
        assert_eq!(net.num_edges(), 5);
        assert_eq!(
            net.vertices().collect::<Vec<_>>(),
            vec!["ME", "Lisa", "Peter", "John", "Diana"]
        );
    }

    #[test]
    fn test_build_network_empty() {
        let net = build_network(&[]);
        assert!(net.is_empty());
        assert_eq!(net.num_edges(), 0);
    }
}
