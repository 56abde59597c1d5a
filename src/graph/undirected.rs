use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A single weighted edge, as supplied by callers building a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((from, to, weight): (N, N, W)) -> Self {
        Edge { from, to, weight }
    }
}

/// An undirected graph implementation using adjacency lists
///
/// Every edge is stored in both directions. Neighbor lists keep insertion order
/// and are never deduplicated: inserting the same pair twice lists the neighbor
/// twice, and the latest weight wins for that pair.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Nodes in the order they were first referenced
    nodes: Vec<N>,

    /// Neighbors of each node: node -> [neighbor]
    adjacency: HashMap<N, Vec<N>>,

    /// Weight of each directed pair: from -> (to -> weight)
    weights: HashMap<N, HashMap<N, W>>,

    /// Number of add_edge calls
    edge_count: usize,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            weights: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            nodes: Vec::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
            weights: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph by inserting every edge in order
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N, W>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            graph.add_edge(from, to, weight);
        }
        graph
    }

    fn register(&mut self, node: &N) {
        if !self.adjacency.contains_key(node) {
            self.nodes.push(node.clone());
            self.adjacency.insert(node.clone(), Vec::new());
        }
    }
}

impl<N, W> Default for UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        if let Some(neighbors) = self.adjacency.get(node) {
            Box::new(neighbors.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.weights.get(from)?.get(to).copied()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}

impl<N, W> MutableGraph<N, W> for UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn add_edge(&mut self, from: N, to: N, weight: W) {
        self.register(&from);
        self.register(&to);

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.push(to.clone());
        }
        if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.push(from.clone());
        }

        self.weights
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight);
        self.weights.entry(to).or_default().insert(from, weight);

        self.edge_count += 1;
    }
}
