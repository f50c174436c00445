//! Runtime strategy selection.

use std::fmt;

use mazecube_core::{Maze, Position};

use crate::astar::astar;
use crate::bfs::bfs;
use crate::bidirectional::bidirectional_bfs;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::distance::Heuristic;
use crate::greedy::greedy_best_first;
use crate::iddfs::iddfs;
use crate::result::SearchResult;
use crate::traits::Topology;

/// A search strategy, selectable at runtime.
///
/// All strategies share one contract: given the same maze, topology and
/// endpoints they produce a reproducible [`SearchResult`]; they differ
/// only in exploration order and the score used to pick the next node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Iddfs,
    Dijkstra,
    Greedy(Heuristic),
    Astar(Heuristic),
    BidirectionalBfs,
}

impl Algorithm {
    /// Run this strategy from `start` to `goal`.
    pub fn search<T: Topology + ?Sized>(
        self,
        maze: &Maze,
        topo: &T,
        start: Position,
        goal: Position,
    ) -> SearchResult {
        match self {
            Algorithm::Bfs => bfs(maze, topo, start, goal),
            Algorithm::Dfs => dfs(maze, topo, start, goal),
            Algorithm::Iddfs => iddfs(maze, topo, start, goal),
            Algorithm::Dijkstra => dijkstra(maze, topo, start, goal),
            Algorithm::Greedy(h) => greedy_best_first(maze, topo, start, goal, h),
            Algorithm::Astar(h) => astar(maze, topo, start, goal, h),
            Algorithm::BidirectionalBfs => bidirectional_bfs(maze, topo, start, goal),
        }
    }

    /// Whether this strategy guarantees shortest paths on unit-cost
    /// grids (A* assuming an admissible heuristic).
    pub const fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::Iddfs
                | Algorithm::Dijkstra
                | Algorithm::Astar(_)
                | Algorithm::BidirectionalBfs
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("bfs"),
            Algorithm::Dfs => f.write_str("dfs"),
            Algorithm::Iddfs => f.write_str("iddfs"),
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::Greedy(h) => write!(f, "gbfs-{h}"),
            Algorithm::Astar(h) => write!(f, "astar-{h}"),
            Algorithm::BidirectionalBfs => f.write_str("bidirectional"),
        }
    }
}
