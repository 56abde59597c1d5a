use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered so that `BinaryHeap` pops the smallest priority first,
/// and among equal priorities the smallest sequence number first.
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    sequence: usize,
    vertex: V,
}

impl<V, P: PartialOrd> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V, P: PartialOrd> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: PartialOrd> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: PartialOrd> Eq for Entry<V, P> {}

/// Min-priority queue for the search frontier
///
/// Each entry carries the sequence number its vertex was discovered with, so
/// that equal priorities come out in discovery order. Stale entries are not
/// removed; callers skip them when popped.
#[derive(Debug)]
pub struct FrontierQueue<V, P>
where
    V: Debug,
    P: PartialOrd + Copy + Debug,
{
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> FrontierQueue<V, P>
where
    V: Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with its priority and discovery sequence number
    pub fn push(&mut self, vertex: V, priority: P, sequence: usize) {
        self.heap.push(Entry {
            priority,
            sequence,
            vertex,
        });
    }

    /// Removes the entry with the lowest priority, earliest sequence on ties
    pub fn pop(&mut self) -> Option<(V, P, usize)> {
        self.heap
            .pop()
            .map(|entry| (entry.vertex, entry.priority, entry.sequence))
    }

    /// Returns the entry `pop` would remove, without removing it
    pub fn peek(&self) -> Option<(&V, P, usize)> {
        self.heap
            .peek()
            .map(|entry| (&entry.vertex, entry.priority, entry.sequence))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for FrontierQueue<V, P>
where
    V: Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
