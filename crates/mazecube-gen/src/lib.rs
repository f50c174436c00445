//! **mazecube-gen** — Maze construction collaborators.
//!
//! Everything here produces a validated [`Maze`](mazecube_core::Maze) to
//! hand to the search strategies in `mazecube-paths`: hand-authored
//! layouts, an ASCII layout parser, and seeded random generators for flat
//! and cube mazes.

pub mod fixed;
pub mod random;
pub mod text;

pub use fixed::{large, small};
pub use random::{random_cube, random_grid, random_walls};
pub use text::{GenError, cube_from_text, from_text};
