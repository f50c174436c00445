//! **mazecube-core** — Maze pathfinding over flat and cube-surface grids
//! (core types).
//!
//! This crate provides the foundational types used across the *mazecube*
//! workspace: face/position geometry, cell states, rectangular grids, and
//! the validated [`Maze`] model. Search strategies live in
//! `mazecube-paths`; maze construction collaborators in `mazecube-gen`.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod maze;

pub use cell::Cell;
pub use geom::{Face, Position};
pub use grid::Grid;
pub use maze::{Maze, MazeError};
