//! Search strategies for flat and cube-surface mazes.
//!
//! This crate provides the topologies, heuristics and search engines of
//! the *mazecube* workspace:
//!
//! - **BFS** ([`bfs()`]) and **bidirectional BFS** ([`bidirectional_bfs()`])
//! - **DFS** ([`dfs()`]) and **iterative-deepening DFS** ([`iddfs()`])
//! - **Dijkstra** ([`dijkstra()`])
//! - **Greedy best-first** ([`greedy_best_first()`]) and **A\***
//!   ([`astar()`]), both parameterized by a [`Heuristic`]
//! - a [`StepwiseBfs`] controller that expands one node per call for
//!   animation-driven consumers
//!
//! Every strategy shares one contract: `search(maze, topology, start,
//! goal) -> SearchResult`, with "no path" reported as a value rather than
//! an error. Neighbor enumeration goes through the [`Topology`] trait,
//! implemented by [`FlatGrid`] for bounded grids and [`CubeSurface`] for
//! six faces glued into a closed surface.

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod cube;
mod dfs;
mod dijkstra;
mod distance;
mod flat;
mod greedy;
mod iddfs;
mod result;
mod stepwise;
mod traits;

pub use algorithm::Algorithm;
pub use astar::astar;
pub use bfs::bfs;
pub use bidirectional::bidirectional_bfs;
pub use cube::CubeSurface;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{Heuristic, chebyshev, euclidean, manhattan, octile};
pub use flat::FlatGrid;
pub use greedy::greedy_best_first;
pub use iddfs::iddfs;
pub use result::SearchResult;
pub use stepwise::StepwiseBfs;
pub use traits::Topology;
