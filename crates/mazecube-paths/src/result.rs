//! The shared search result record and frontier plumbing.

use std::cmp::Ordering;

use mazecube_core::Position;
use rustc_hash::{FxHashMap, FxHashSet};

/// Outcome of one search invocation.
///
/// Frontier exhaustion is a normal outcome (`found == false`, empty
/// `path`), never an error. `step_count` counts frontier entries
/// expanded; `visited` is every position the strategy marked while
/// running.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    /// Start-to-goal sequence of positions; empty when no path exists.
    pub path: Vec<Position>,
    /// Edge count of `path`: `path.len() - 1`, or 0 when empty.
    pub path_length: usize,
    pub step_count: usize,
    pub visited: FxHashSet<Position>,
}

impl SearchResult {
    pub(crate) fn success(
        path: Vec<Position>,
        step_count: usize,
        visited: FxHashSet<Position>,
    ) -> Self {
        let path_length = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            path_length,
            step_count,
            visited,
        }
    }

    pub(crate) fn exhausted(step_count: usize, visited: FxHashSet<Position>) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            path_length: 0,
            step_count,
            visited,
        }
    }
}

/// Walk predecessor pointers from `goal` back to `start`, then reverse.
pub(crate) fn reconstruct(
    parent: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Min-ordered frontier entry for the priority-queue strategies.
///
/// `BinaryHeap` is a max-heap with no tie order, so the comparison is
/// inverted and ties on `priority` fall back to the insertion sequence,
/// keeping expansion order deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub priority: f64,
    pub seq: u64,
    pub pos: Position,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(priority: f64, seq: u64) -> HeapEntry {
        HeapEntry {
            priority,
            seq,
            pos: Position::flat(0, 0),
        }
    }

    #[test]
    fn heap_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 0));
        heap.push(entry(1.0, 1));
        heap.push(entry(2.0, 2));
        assert_eq!(heap.pop().unwrap().priority, 1.0);
        assert_eq!(heap.pop().unwrap().priority, 2.0);
        assert_eq!(heap.pop().unwrap().priority, 3.0);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1.0, 2));
        heap.push(entry(1.0, 0));
        heap.push(entry(1.0, 1));
        assert_eq!(heap.pop().unwrap().seq, 0);
        assert_eq!(heap.pop().unwrap().seq, 1);
        assert_eq!(heap.pop().unwrap().seq, 2);
    }

    #[test]
    fn reconstruct_walks_parents_back_to_start() {
        let start = Position::flat(0, 0);
        let mid = Position::flat(0, 1);
        let goal = Position::flat(0, 2);
        let mut parent = FxHashMap::default();
        parent.insert(mid, start);
        parent.insert(goal, mid);
        assert_eq!(reconstruct(&parent, start, goal), vec![start, mid, goal]);
    }

    #[test]
    fn reconstruct_of_start_is_single_cell() {
        let start = Position::flat(1, 1);
        let parent = FxHashMap::default();
        assert_eq!(reconstruct(&parent, start, start), vec![start]);
    }

    #[test]
    fn result_lengths() {
        let path = vec![Position::flat(0, 0), Position::flat(0, 1)];
        let r = SearchResult::success(path, 5, FxHashSet::default());
        assert_eq!(r.path_length, 1);
        let r = SearchResult::exhausted(3, FxHashSet::default());
        assert!(!r.found);
        assert_eq!(r.path_length, 0);
        assert!(r.path.is_empty());
    }
}
