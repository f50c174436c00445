//! Random maze generators.
//!
//! All generators take a caller-supplied [`Rng`] so runs can be seeded
//! deterministically. Marker placement overwrites the chosen cells, so
//! start and goal are always walkable; everything else about the layout
//! is up to the dice.

use mazecube_core::{Cell, Face, Grid, Maze, MazeError, Position};
use rand::{Rng, RngExt};

/// A flat maze with a solid border and interior walls drawn with
/// probability `wall_probability`. Start and goal are carved at opposite
/// interior corners.
pub fn random_walls(
    rows: i32,
    cols: i32,
    wall_probability: f64,
    rng: &mut impl Rng,
) -> Result<Maze, MazeError> {
    assert!(rows >= 4 && cols >= 4, "maze needs room for interior cells");
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            let border = r == 0 || r == rows - 1 || c == 0 || c == cols - 1;
            if border || rng.random_bool(wall_probability) {
                grid.set(r, c, Cell::Wall);
            }
        }
    }
    grid.set(1, 1, Cell::Start);
    grid.set(rows - 2, cols - 2, Cell::Goal);
    Maze::flat(grid)
}

/// A flat maze with a solid border and a regular pillar pattern inside
/// (walls on even/even coordinates). Start and goal land on random
/// distinct interior cells.
pub fn random_grid(rows: i32, cols: i32, rng: &mut impl Rng) -> Result<Maze, MazeError> {
    assert!(rows >= 4 && cols >= 4, "maze needs room for interior cells");
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            let border = r == 0 || r == rows - 1 || c == 0 || c == cols - 1;
            if border || (r % 2 == 0 && c % 2 == 0) {
                grid.set(r, c, Cell::Wall);
            }
        }
    }
    let start = pick_interior(&grid, rng, None);
    grid.set(start.0, start.1, Cell::Start);
    let goal = pick_interior(&grid, rng, Some(start));
    grid.set(goal.0, goal.1, Cell::Goal);
    Maze::flat(grid)
}

/// A cube maze: six faces with walls drawn independently with probability
/// `wall_probability`, start and goal on random distinct cells.
pub fn random_cube(
    size: i32,
    wall_probability: f64,
    rng: &mut impl Rng,
) -> Result<Maze, MazeError> {
    assert!(size >= 2, "cube faces need at least two cells per side");
    let mut faces: [Grid; 6] = std::array::from_fn(|_| Grid::new(size, size));
    for grid in &mut faces {
        for r in 0..size {
            for c in 0..size {
                if rng.random_bool(wall_probability) {
                    grid.set(r, c, Cell::Wall);
                }
            }
        }
    }
    let start = pick_on_cube(&faces, rng, None);
    faces[start.face.index()].set(start.row, start.col, Cell::Start);
    let goal = pick_on_cube(&faces, rng, Some(start));
    faces[goal.face.index()].set(goal.row, goal.col, Cell::Goal);
    log::debug!("random_cube: size {size}, start {start}, goal {goal}");
    Maze::cube(faces)
}

/// Pick a random open interior cell, excluding at most one. Falls back to
/// carving a wall cell when the dice left nothing open.
fn pick_interior(grid: &Grid, rng: &mut impl Rng, exclude: Option<(i32, i32)>) -> (i32, i32) {
    let mut open = Vec::new();
    let mut any = Vec::new();
    for r in 1..grid.rows() - 1 {
        for c in 1..grid.cols() - 1 {
            if exclude == Some((r, c)) {
                continue;
            }
            any.push((r, c));
            if grid.at(r, c) == Cell::Open {
                open.push((r, c));
            }
        }
    }
    let pool = if open.is_empty() {
        log::warn!("no open interior cell left, carving one");
        &any
    } else {
        &open
    };
    pool[rng.random_range(0..pool.len())]
}

/// Pick a random open cell anywhere on the cube, excluding at most one.
fn pick_on_cube(faces: &[Grid; 6], rng: &mut impl Rng, exclude: Option<Position>) -> Position {
    let mut open = Vec::new();
    let mut any = Vec::new();
    for face in Face::ALL {
        let grid = &faces[face.index()];
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let p = Position::new(face, r, c);
                if exclude == Some(p) {
                    continue;
                }
                any.push(p);
                if grid.at(r, c) == Cell::Open {
                    open.push(p);
                }
            }
        }
    }
    let pool = if open.is_empty() {
        log::warn!("no open cell left on the cube, carving one");
        &any
    } else {
        &open
    };
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecube_paths::{CubeSurface, FlatGrid, bfs};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_walls_is_a_valid_maze() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = random_walls(8, 10, 0.25, &mut rng).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (8, 10));
        assert_eq!(maze.start(), Position::flat(1, 1));
        assert_eq!(maze.goal(), Position::flat(6, 8));
        assert!(maze.is_open(maze.start()));
        assert!(maze.is_open(maze.goal()));
    }

    #[test]
    fn wall_free_random_walls_is_solvable() {
        let mut rng = StdRng::seed_from_u64(1);
        let maze = random_walls(6, 6, 0.0, &mut rng).unwrap();
        let topo = FlatGrid::new(6, 6);
        let r = bfs(&maze, &topo, maze.start(), maze.goal());
        assert!(r.found);
        assert_eq!(r.path_length, 6);
    }

    #[test]
    fn random_grid_places_markers_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let maze = random_grid(9, 9, &mut rng).unwrap();
        for p in [maze.start(), maze.goal()] {
            assert!(p.row > 0 && p.row < 8, "{p}");
            assert!(p.col > 0 && p.col < 8, "{p}");
        }
        assert_ne!(maze.start(), maze.goal());
    }

    #[test]
    fn pillar_pattern_leaves_the_interior_connected() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = random_grid(10, 10, &mut rng).unwrap();
        let topo = FlatGrid::new(10, 10);
        let r = bfs(&maze, &topo, maze.start(), maze.goal());
        assert!(r.found);
    }

    #[test]
    fn wall_free_random_cube_is_solvable() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = random_cube(4, 0.0, &mut rng).unwrap();
        assert!(maze.is_cube());
        let topo = CubeSurface::new(4);
        let r = bfs(&maze, &topo, maze.start(), maze.goal());
        assert!(r.found);
    }

    #[test]
    fn all_wall_cube_still_places_markers() {
        let mut rng = StdRng::seed_from_u64(5);
        let maze = random_cube(3, 1.0, &mut rng).unwrap();
        assert!(maze.is_open(maze.start()));
        assert!(maze.is_open(maze.goal()));
        assert_ne!(maze.start(), maze.goal());
    }

    #[test]
    fn generation_is_deterministic_under_a_seed() {
        let a = random_walls(8, 8, 0.3, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = random_walls(8, 8, 0.3, &mut StdRng::seed_from_u64(11)).unwrap();
        let mismatches = a.positions().filter(|&p| a.at(p) != b.at(p)).count();
        assert_eq!(mismatches, 0);
    }
}
