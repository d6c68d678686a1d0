//! Min-priority queue for the shortest path search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::TravelTime;

/// Heap entry ordered so that `BinaryHeap` pops the smallest priority first,
/// and among equal priorities the earliest insertion first.
struct Entry<T> {
    priority: TravelTime,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary-heap priority queue keyed by travel time.
///
/// Items with equal priority are popped in insertion order, which keeps
/// search results reproducible across runs.
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert an item with the given priority.
    pub fn push(&mut self, item: T, priority: TravelTime) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove and return the item with the smallest priority.
    pub fn pop_min(&mut self) -> Option<(T, TravelTime)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
