//! Breadth-first search.

use std::collections::VecDeque;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::{SearchResult, reconstruct};
use crate::traits::Topology;

/// Breadth-first search from `start` to `goal`.
///
/// The frontier is a FIFO queue, so the returned path is a shortest path
/// on unit-cost grids.
pub fn bfs<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
) -> SearchResult {
    let mut queue = VecDeque::from([start]);
    let mut visited = FxHashSet::from_iter([start]);
    let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0;

    while let Some(current) = queue.pop_front() {
        steps += 1;
        if current == goal {
            let path = reconstruct(&parent, start, goal);
            log::debug!(
                "bfs: goal after {steps} expansions, path length {}",
                path.len() - 1
            );
            return SearchResult::success(path, steps, visited);
        }
        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !visited.contains(&n) && maze.is_open(n) {
                visited.insert(n);
                parent.insert(n, current);
                queue.push_back(n);
            }
        }
    }
    log::debug!("bfs: frontier exhausted after {steps} expansions");
    SearchResult::exhausted(steps, visited)
}
