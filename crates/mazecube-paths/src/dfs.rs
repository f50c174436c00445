//! Depth-first search.

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::{SearchResult, reconstruct};
use crate::traits::Topology;

/// Depth-first search from `start` to `goal`.
///
/// The frontier is a LIFO stack; the returned path follows the discovery
/// tree and is not guaranteed shortest.
pub fn dfs<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
) -> SearchResult {
    let mut stack = vec![start];
    let mut visited = FxHashSet::from_iter([start]);
    let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0;

    while let Some(current) = stack.pop() {
        steps += 1;
        if current == goal {
            return SearchResult::success(reconstruct(&parent, start, goal), steps, visited);
        }
        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !visited.contains(&n) && maze.is_open(n) {
                visited.insert(n);
                parent.insert(n, current);
                stack.push(n);
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
    fn finds_a_path_on_an_open_grid() {
        let maze = flat_maze("O...\n....\n....\n...X");
        let topo = FlatGrid::new(4, 4);
        let r = dfs(&maze, &topo, maze.start(), maze.goal());
        assert!(r.found);
        assert!(r.path_length >= 6);
        assert_eq!(r.path.first(), Some(&maze.start()));
        assert_eq!(r.path.last(), Some(&maze.goal()));
        assert_path_valid(&maze, &topo, &r.path);
    }

    #[test]
    fn threads_a_corridor() {
        let maze = flat_maze("O#.\n.#.\n..X");
        let topo = FlatGrid::new(3, 3);
        let r = dfs(&maze, &topo, maze.start(), maze.goal());
        assert!(r.found);
        assert_eq!(r.path_length, 4);
        assert_path_valid(&maze, &topo, &r.path);
    }

    #[test]
    fn walled_in_goal_is_not_found() {
        let (maze, topo) = walled_goal_maze();
        let r = dfs(&maze, &topo, maze.start(), maze.goal());
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert!(!r.visited.is_empty());
    }
}
