/// How the next node to settle is picked from the frontier
///
/// Both strategies settle nodes in exactly the same order: smallest cumulative
/// weight first, and among equal weights the node discovered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Scan every discovered node on each step. O(V^2)
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap keyed on (weight, discovery order). O((V+E) log V)
    BinaryHeap,
}

/// Configuration for a path finder
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub strategy: FrontierStrategy,
    /// Reject graphs holding negative weights before searching
    pub validate_weights: bool,
}
