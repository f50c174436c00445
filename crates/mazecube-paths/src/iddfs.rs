//! Iterative-deepening depth-first search.

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::{SearchResult, reconstruct};
use crate::traits::Topology;

/// Iterative-deepening depth-first search from `start` to `goal`.
///
/// Runs a depth-limited DFS with the limit raised from 0, so the first
/// success is at minimal depth. The limit is capped at the topology's
/// cell count; past that the maze is exhausted and the search reports
/// `found == false` instead of deepening forever.
pub fn iddfs<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
) -> SearchResult {
    let cap = topo.cell_count();
    let mut visited = FxHashSet::default();
    let mut steps = 0;

    for limit in 0..=cap {
        if let Some(path) = depth_limited(maze, topo, start, goal, limit, &mut steps, &mut visited)
        {
            log::debug!(
                "iddfs: goal at depth limit {limit} after {steps} expansions"
            );
            return SearchResult::success(path, steps, visited);
        }
    }
    log::debug!("iddfs: no path within {cap} cells after {steps} expansions");
    SearchResult::exhausted(steps, visited)
}

/// One depth-limited pass. Iterative, with an explicit stack of
/// `(position, depth)` frames.
///
/// A position reached again at a strictly shallower depth is re-expanded;
/// pruning on first contact alone could hide a path that fits the limit.
fn depth_limited<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
    limit: usize,
    steps: &mut usize,
    visited: &mut FxHashSet<Position>,
) -> Option<Vec<Position>> {
    let mut stack = vec![(start, 0usize)];
    let mut best_depth: FxHashMap<Position, usize> = FxHashMap::from_iter([(start, 0)]);
    let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
    let mut nbuf = Vec::with_capacity(4);

    while let Some((current, depth)) = stack.pop() {
        // A shallower route to this cell has been queued since.
        if best_depth.get(&current).is_some_and(|&d| d < depth) {
            continue;
        }
        *steps += 1;
        visited.insert(current);
        if current == goal {
            return Some(reconstruct(&parent, start, goal));
        }
        if depth == limit {
            continue;
        }
        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !maze.is_open(n) {
                continue;
            }
            let nd = depth + 1;
            if best_depth.get(&n).is_none_or(|&d| nd < d) {
                best_depth.insert(n, nd);
                parent.insert(n, current);
                stack.push((n, nd));
            }
        }
    }
    None
}
