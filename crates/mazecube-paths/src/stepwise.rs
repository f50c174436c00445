//! One-expansion-at-a-time breadth-first search.
//!
//! External drivers (animation frames, timers, key presses) call
//! [`StepwiseBfs::advance_step`] at their own cadence and redraw from the
//! accessors between calls; the controller performs no scheduling of its
//! own.

use std::collections::VecDeque;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::reconstruct;
use crate::traits::Topology;

/// A breadth-first search advanced one frontier expansion per call.
///
/// Owns its frontier/visited/parent state for the lifetime of one
/// animation session. Expansion order is identical to
/// [`bfs`](crate::bfs()), so driving the controller to completion yields
/// the same path as the one-shot call.
pub struct StepwiseBfs<'a, T: Topology + ?Sized> {
    maze: &'a Maze,
    topo: &'a T,
    start: Position,
    goal: Position,
    queue: VecDeque<Position>,
    visited: FxHashSet<Position>,
    parent: FxHashMap<Position, Position>,
    path: Vec<Position>,
    nbuf: Vec<Position>,
    current: Position,
    steps: usize,
    done: bool,
    found: bool,
}

impl<'a, T: Topology + ?Sized> StepwiseBfs<'a, T> {
    /// Create a controller with the start position already on the
    /// frontier.
    pub fn new(maze: &'a Maze, topo: &'a T, start: Position, goal: Position) -> Self {
        Self {
            maze,
            topo,
            start,
            goal,
            queue: VecDeque::from([start]),
            visited: FxHashSet::from_iter([start]),
            parent: FxHashMap::default(),
            path: Vec::new(),
            nbuf: Vec::with_capacity(4),
            current: start,
            steps: 0,
            done: false,
            found: false,
        }
    }

    /// Expand one frontier entry and return its position.
    ///
    /// On reaching the goal the path is reconstructed and stored. Once
    /// the search is done (goal reached or frontier exhausted) further
    /// calls are no-ops returning the last known position.
    pub fn advance_step(&mut self) -> Position {
        if self.done {
            return self.current;
        }
        let Some(current) = self.queue.pop_front() else {
            self.done = true;
            return self.current;
        };
        self.steps += 1;
        self.current = current;
        if current == self.goal {
            self.path = reconstruct(&self.parent, self.start, self.goal);
            self.done = true;
            self.found = true;
            return current;
        }
        self.nbuf.clear();
        self.topo.neighbors(current, &mut self.nbuf);
        for &n in &self.nbuf {
            if !self.visited.contains(&n) && self.maze.is_open(n) {
                self.visited.insert(n);
                self.parent.insert(n, current);
                self.queue.push_back(n);
            }
        }
        current
    }

    /// The most recently expanded position.
    pub fn current(&self) -> Position {
        self.current
    }

    /// The reconstructed path; empty until the goal has been reached.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Every position discovered so far.
    pub fn visited(&self) -> &FxHashSet<Position> {
        &self.visited
    }

    /// Number of frontier expansions performed.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the search has finished, successfully or not.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the goal has been reached.
    pub fn found(&self) -> bool {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use crate::testutil::{flat_maze, open_grid, walled_goal_maze};

    #[test]
    fn driven_to_completion_matches_batch_bfs() {
        let (maze, topo) = open_grid(4, 4);
        let mut ctl = StepwiseBfs::new(&maze, &topo, maze.start(), maze.goal());
        while !ctl.is_done() {
            ctl.advance_step();
        }
        let batch = bfs(&maze, &topo, maze.start(), maze.goal());
        assert!(ctl.found());
        assert_eq!(ctl.path(), batch.path.as_slice());
        assert_eq!(ctl.steps(), batch.step_count);
        assert_eq!(ctl.visited(), &batch.visited);
    }

    #[test]
    fn path_is_empty_until_found() {
        let (maze, topo) = open_grid(3, 3);
        let mut ctl = StepwiseBfs::new(&maze, &topo, maze.start(), maze.goal());
        assert!(ctl.path().is_empty());
        ctl.advance_step();
        assert!(ctl.path().is_empty());
        assert!(!ctl.is_done());
    }

    #[test]
    fn reads_are_idempotent() {
        let (maze, topo) = open_grid(3, 3);
        let mut ctl = StepwiseBfs::new(&maze, &topo, maze.start(), maze.goal());
        ctl.advance_step();
        ctl.advance_step();
        let path_a: Vec<_> = ctl.path().to_vec();
        let visited_a = ctl.visited().clone();
        let path_b: Vec<_> = ctl.path().to_vec();
        let visited_b = ctl.visited().clone();
        assert_eq!(path_a, path_b);
        assert_eq!(visited_a, visited_b);
        assert_eq!(ctl.steps(), 2);
    }

    #[test]
    fn advancing_past_the_goal_is_a_no_op() {
        let maze = flat_maze("O.X");
        let topo = crate::FlatGrid::new(1, 3);
        let mut ctl = StepwiseBfs::new(&maze, &topo, maze.start(), maze.goal());
        while !ctl.is_done() {
            ctl.advance_step();
        }
        let goal = ctl.current();
        assert_eq!(goal, maze.goal());
        let steps = ctl.steps();
        assert_eq!(ctl.advance_step(), goal);
        assert_eq!(ctl.advance_step(), goal);
        assert_eq!(ctl.steps(), steps);
    }

    #[test]
    fn exhausted_frontier_finishes_without_a_path() {
        let (maze, topo) = walled_goal_maze();
        let mut ctl = StepwiseBfs::new(&maze, &topo, maze.start(), maze.goal());
        for _ in 0..maze.cell_count() + 2 {
            ctl.advance_step();
        }
        assert!(ctl.is_done());
        assert!(!ctl.found());
        assert!(ctl.path().is_empty());
    }
}
