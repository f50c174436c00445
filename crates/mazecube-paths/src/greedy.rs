//! Greedy best-first search.

use std::collections::BinaryHeap;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::distance::Heuristic;
use crate::result::{HeapEntry, SearchResult, reconstruct};
use crate::traits::Topology;

/// Greedy best-first search from `start` to `goal`.
///
/// Expands the frontier purely by the chosen [`Heuristic`] estimate to the
/// goal, ignoring accumulated cost; fast, but the returned path is not
/// guaranteed shortest. Estimate ties break by insertion order.
pub fn greedy_best_first<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
    heuristic: Heuristic,
) -> SearchResult {
    let mut open = BinaryHeap::new();
    let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
    let mut visited = FxHashSet::default();
    let mut nbuf = Vec::with_capacity(4);
    let mut seq: u64 = 0;
    let mut steps = 0;

    open.push(HeapEntry {
        priority: heuristic.estimate(start, goal),
        seq,
        pos: start,
    });
    seq += 1;

    while let Some(entry) = open.pop() {
        let current = entry.pos;
        if !visited.insert(current) {
            continue;
        }
        steps += 1;
        if current == goal {
            return SearchResult::success(reconstruct(&parent, start, goal), steps, visited);
        }

        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if visited.contains(&n) || !maze.is_open(n) {
                continue;
            }
            if !parent.contains_key(&n) {
                parent.insert(n, current);
                open.push(HeapEntry {
                    priority: heuristic.estimate(n, goal),
                    seq,
                    pos: n,
                });
                seq += 1;
            }
        }
    }
    SearchResult::exhausted(steps, visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_path_valid, flat_maze, walled_goal_maze};
    use crate::FlatGrid;

    #[test]
    fn heads_straight_for_the_goal_on_open_ground() {
        let maze = flat_maze("O...\n....\n....\n...X");
        let topo = FlatGrid::new(4, 4);
        let r = greedy_best_first(&maze, &topo, maze.start(), maze.goal(), Heuristic::Manhattan);
        assert!(r.found);
        assert_eq!(r.path_length, 6);
        assert_path_valid(&maze, &topo, &r.path);
    }

    #[test]
    fn every_heuristic_is_selectable() {
        let maze = flat_maze("O...#\n.##.#\n.#..#\n.#.##\n....X");
        let topo = FlatGrid::new(5, 5);
        for h in Heuristic::ALL {
            let r = greedy_best_first(&maze, &topo, maze.start(), maze.goal(), h);
            assert!(r.found, "{h}");
            assert_path_valid(&maze, &topo, &r.path);
        }
    }

    #[test]
    fn walled_in_goal_is_not_found() {
        let (maze, topo) = walled_goal_maze();
        let r = greedy_best_first(&maze, &topo, maze.start(), maze.goal(), Heuristic::Octile);
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert!(!r.visited.is_empty());
    }
}
