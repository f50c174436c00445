//! A* search.

use std::collections::BinaryHeap;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::distance::Heuristic;
use crate::result::{HeapEntry, SearchResult, reconstruct};
use crate::traits::Topology;

/// A* search from `start` to `goal`.
///
/// Expands the frontier in order of `g + h` where `h` is the chosen
/// [`Heuristic`]; the result is a shortest path whenever `h` never
/// overestimates. Score ties break by insertion order.
pub fn astar<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
    heuristic: Heuristic,
) -> SearchResult {
    let mut open = BinaryHeap::new();
    let mut g_score: FxHashMap<Position, usize> = FxHashMap::from_iter([(start, 0)]);
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
            let path = reconstruct(&parent, start, goal);
            log::debug!(
                "astar-{heuristic}: goal after {steps} expansions, path length {}",
                path.len() - 1
            );
            return SearchResult::success(path, steps, visited);
        }
        let current_g = g_score[&current];

        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if visited.contains(&n) || !maze.is_open(n) {
                continue;
            }
            let tentative = current_g + 1;
            if g_score.get(&n).is_none_or(|&g| tentative < g) {
                g_score.insert(n, tentative);
                parent.insert(n, current);
                open.push(HeapEntry {
                    priority: tentative as f64 + heuristic.estimate(n, goal),
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
    use crate::bfs::bfs;
    use crate::testutil::{assert_path_valid, flat_maze, open_grid, walled_goal_maze};
    use crate::FlatGrid;

    #[test]
    fn every_heuristic_is_optimal_on_a_flat_grid() {
        let maze = flat_maze("O...#\n.##.#\n.#..#\n.#.##\n....X");
        let topo = FlatGrid::new(5, 5);
        let b = bfs(&maze, &topo, maze.start(), maze.goal());
        for h in Heuristic::ALL {
            let r = astar(&maze, &topo, maze.start(), maze.goal(), h);
            assert!(r.found, "{h}");
            assert_eq!(r.path_length, b.path_length, "{h}");
            assert_path_valid(&maze, &topo, &r.path);
        }
    }

    #[test]
    fn euclidean_matches_manhattan_corner_to_corner() {
        let (maze, topo) = open_grid(10, 10);
        let e = astar(&maze, &topo, maze.start(), maze.goal(), Heuristic::Euclidean);
        let m = astar(&maze, &topo, maze.start(), maze.goal(), Heuristic::Manhattan);
        assert!(e.found && m.found);
        assert_eq!(e.path_length, 18);
        assert_eq!(m.path_length, 18);
    }

    #[test]
    fn walled_in_goal_is_not_found() {
        let (maze, topo) = walled_goal_maze();
        let r = astar(&maze, &topo, maze.start(), maze.goal(), Heuristic::Manhattan);
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert!(!r.visited.is_empty());
    }

    #[test]
    fn expands_fewer_nodes_than_bfs_on_open_ground() {
        let (maze, topo) = open_grid(10, 10);
        let a = astar(&maze, &topo, maze.start(), maze.goal(), Heuristic::Manhattan);
        let b = bfs(&maze, &topo, maze.start(), maze.goal());
        assert!(a.step_count <= b.step_count);
    }
}
