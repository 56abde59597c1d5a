use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;

use crate::{Error, Result};

/// Trait representing a weighted graph that can be searched for routes
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Returns the number of nodes referenced by at least one edge
    fn node_count(&self) -> usize;

    /// Returns the number of edge insertions
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes in the order they were first referenced
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns the neighbors of a node in insertion order, empty for unknown nodes
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// Gets the weight of the edge from `from` to `to` if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Returns true if the node appears in at least one edge
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Checks that no stored edge weight is negative
    fn validate_non_negative(&self) -> Result<()> {
        for node in self.nodes() {
            for neighbor in self.neighbors(node) {
                if let Some(weight) = self.edge_weight(node, neighbor) {
                    if weight < W::zero() {
                        return Err(Error::NegativeWeight(format!("{:?}", weight)));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Adds an edge between two nodes, creating either node on first reference
    fn add_edge(&mut self, from: N, to: N, weight: W);
}
