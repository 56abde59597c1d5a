use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;

use crate::Error;

/// Best-known way to reach a node during one search
#[derive(Debug, Clone)]
struct Label<N, W> {
    predecessor: Option<N>,
    weight: W,
    /// Position of the node in discovery order
    sequence: usize,
}

/// Outcome of offering a candidate weight for a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relaxation<W> {
    /// First time the node was reached
    Discovered { weight: W, sequence: usize },
    /// Strictly cheaper than the previous best
    Improved { weight: W, sequence: usize },
    Unchanged,
}

/// Transient bookkeeping owned by a single search
///
/// The frontier is implicit: every discovered node not yet visited. Labels of
/// visited nodes are final and are never touched again.
#[derive(Debug)]
pub struct SearchState<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    best: HashMap<N, Label<N, W>>,
    discovery: Vec<N>,
    visited: HashSet<N>,
    overflowed: bool,
}

impl<N, W> SearchState<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Starts a search at `start` with cumulative weight zero
    pub fn new(start: N) -> Self {
        let mut best = HashMap::new();
        best.insert(
            start.clone(),
            Label {
                predecessor: None,
                weight: W::zero(),
                sequence: 0,
            },
        );

        SearchState {
            best,
            discovery: vec![start],
            visited: HashSet::new(),
            overflowed: false,
        }
    }

    /// Best-known cumulative weight of a discovered node
    pub fn weight_of(&self, node: &N) -> Option<W> {
        self.best.get(node).map(|label| label.weight)
    }

    /// Node the best-known path to `node` arrives from, `None` for the start
    pub fn predecessor_of(&self, node: &N) -> Option<&N> {
        self.best.get(node)?.predecessor.as_ref()
    }

    /// Returns true once the node's weight is final
    pub fn is_visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    /// Number of nodes finalized so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Records that a candidate weight was dropped because it overflowed
    pub fn note_overflow(&mut self) {
        self.overflowed = true;
    }

    /// Error to report when the frontier runs dry before the end is settled
    ///
    /// If an overflowing candidate was dropped, the end may have been reachable
    /// through it, so that is reported instead of an unreachable end.
    pub fn exhausted(&self) -> Error {
        if self.overflowed {
            Error::WeightOverflow
        } else {
            Error::RouteNotPossible
        }
    }

    /// Marks a discovered node as final and returns its cumulative weight
    pub fn settle(&mut self, node: &N) -> Option<W> {
        let weight = self.weight_of(node)?;
        self.visited.insert(node.clone());
        Some(weight)
    }

    /// Offers `candidate` as the cumulative weight of `node` via `from`
    ///
    /// Only a strict improvement replaces an existing label, so on ties the
    /// earlier predecessor is kept.
    pub fn relax(&mut self, from: &N, node: &N, candidate: W) -> Relaxation<W> {
        if self.visited.contains(node) {
            return Relaxation::Unchanged;
        }

        match self.best.get_mut(node) {
            None => {
                let sequence = self.discovery.len();
                self.discovery.push(node.clone());
                self.best.insert(
                    node.clone(),
                    Label {
                        predecessor: Some(from.clone()),
                        weight: candidate,
                        sequence,
                    },
                );
                Relaxation::Discovered {
                    weight: candidate,
                    sequence,
                }
            }
            Some(label) if candidate < label.weight => {
                label.predecessor = Some(from.clone());
                label.weight = candidate;
                Relaxation::Improved {
                    weight: candidate,
                    sequence: label.sequence,
                }
            }
            Some(_) => Relaxation::Unchanged,
        }
    }

    /// Frontier node with the smallest weight, earliest discovered on ties
    pub fn cheapest_unvisited(&self) -> Option<N> {
        let mut chosen: Option<(&N, W)> = None;

        for node in &self.discovery {
            if self.visited.contains(node) {
                continue;
            }
            let Some(weight) = self.weight_of(node) else {
                continue;
            };
            let cheaper = match chosen {
                None => true,
                Some((_, best_weight)) => weight < best_weight,
            };
            if cheaper {
                chosen = Some((node, weight));
            }
        }

        chosen.map(|(node, _)| node.clone())
    }

    /// Walks predecessor links back from `end` and returns the start-to-end path
    ///
    /// Returns an empty vector if `end` was never discovered.
    pub fn path_to(&self, end: &N) -> Vec<N> {
        let mut path = Vec::new();
        let mut cursor = self.best.get_key_value(end).map(|(node, _)| node);

        while let Some(node) = cursor {
            path.push(node.clone());
            cursor = self.predecessor_of(node);
        }

        path.reverse();
        path
    }
}
