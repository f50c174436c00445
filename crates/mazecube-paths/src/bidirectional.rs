//! Bidirectional breadth-first search.

use std::collections::VecDeque;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::{SearchResult, reconstruct};
use crate::traits::Topology;

/// Bidirectional breadth-first search from `start` to `goal`.
///
/// Two FIFO frontiers expand alternately, one from each endpoint. The
/// search terminates when a frontier dequeues a position the other side
/// has already expanded; the path is stitched from both parent maps at
/// that meeting position.
pub fn bidirectional_bfs<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
) -> SearchResult {
    if start == goal {
        return SearchResult::success(vec![start], 1, FxHashSet::from_iter([start]));
    }

    let mut queue_s = VecDeque::from([start]);
    let mut queue_g = VecDeque::from([goal]);
    let mut discovered_s = FxHashSet::from_iter([start]);
    let mut discovered_g = FxHashSet::from_iter([goal]);
    let mut parent_s: FxHashMap<Position, Position> = FxHashMap::default();
    let mut parent_g: FxHashMap<Position, Position> = FxHashMap::default();
    let mut expanded_s = FxHashSet::default();
    let mut expanded_g = FxHashSet::default();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0;

    loop {
        // One expansion from the start side.
        let Some(current) = queue_s.pop_front() else {
            break;
        };
        steps += 1;
        if expanded_g.contains(&current) {
            return meet(current, start, &parent_s, &parent_g, steps, expanded_s, expanded_g);
        }
        expanded_s.insert(current);
        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !discovered_s.contains(&n) && maze.is_open(n) {
                discovered_s.insert(n);
                parent_s.insert(n, current);
                queue_s.push_back(n);
            }
        }

        // One expansion from the goal side.
        let Some(current) = queue_g.pop_front() else {
            break;
        };
        steps += 1;
        if expanded_s.contains(&current) {
            return meet(current, start, &parent_s, &parent_g, steps, expanded_s, expanded_g);
        }
        expanded_g.insert(current);
        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !discovered_g.contains(&n) && maze.is_open(n) {
                discovered_g.insert(n);
                parent_g.insert(n, current);
                queue_g.push_back(n);
            }
        }
    }

    let visited: FxHashSet<Position> = expanded_s.union(&expanded_g).copied().collect();
    SearchResult::exhausted(steps, visited)
}

/// Stitch the two half-paths together at the meeting position.
fn meet(
    meeting: Position,
    start: Position,
    parent_s: &FxHashMap<Position, Position>,
    parent_g: &FxHashMap<Position, Position>,
    steps: usize,
    expanded_s: FxHashSet<Position>,
    expanded_g: FxHashSet<Position>,
) -> SearchResult {
    let mut path = reconstruct(parent_s, start, meeting);
    let mut current = meeting;
    while let Some(&next) = parent_g.get(&current) {
        path.push(next);
        current = next;
    }
    log::debug!(
        "bidirectional: frontiers met at {meeting} after {steps} expansions"
    );
    let visited: FxHashSet<Position> = expanded_s.union(&expanded_g).copied().collect();
    SearchResult::success(path, steps, visited)
}
