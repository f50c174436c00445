//! The maze model: one or six cell grids with validated markers.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Face, Position};
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from maze construction and marker lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No [`Cell::Start`] anywhere in the maze.
    MissingStart,
    /// No [`Cell::Goal`] anywhere in the maze.
    MissingGoal,
    /// A second [`Cell::Start`] was found at this position.
    DuplicateStart(Position),
    /// A second [`Cell::Goal`] was found at this position.
    DuplicateGoal(Position),
    /// [`Maze::find`] did not locate the requested marker.
    MarkerNotFound(Cell),
    /// A cube face grid is not square.
    NotSquare { rows: i32, cols: i32 },
    /// Cube face grids disagree on size.
    SizeMismatch { expected: i32, found: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "maze has no start cell"),
            Self::MissingGoal => write!(f, "maze has no goal cell"),
            Self::DuplicateStart(p) => write!(f, "maze has a second start cell at {p}"),
            Self::DuplicateGoal(p) => write!(f, "maze has a second goal cell at {p}"),
            Self::MarkerNotFound(c) => write!(f, "marker {c:?} not present in maze"),
            Self::NotSquare { rows, cols } => {
                write!(f, "cube face grid is {rows}x{cols}, expected square")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "cube face grid is size {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Layout {
    Flat(Grid),
    Cube(Box<[Grid; 6]>),
}

/// An immutable maze: a flat grid or six square face grids, holding exactly
/// one start and one goal marker.
///
/// Construction validates the marker invariant; searches treat the maze as
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Maze {
    layout: Layout,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Build a flat maze from a single grid.
    pub fn flat(grid: Grid) -> Result<Self, MazeError> {
        Self::with_layout(Layout::Flat(grid))
    }

    /// Build a cube-surface maze from six face grids in [`Face::ALL`] order.
    ///
    /// Every grid must be square and all must share one size.
    pub fn cube(faces: [Grid; 6]) -> Result<Self, MazeError> {
        let size = faces[0].rows();
        for g in &faces {
            if g.rows() != g.cols() {
                return Err(MazeError::NotSquare {
                    rows: g.rows(),
                    cols: g.cols(),
                });
            }
            if g.rows() != size {
                return Err(MazeError::SizeMismatch {
                    expected: size,
                    found: g.rows(),
                });
            }
        }
        Self::with_layout(Layout::Cube(Box::new(faces)))
    }

    fn with_layout(layout: Layout) -> Result<Self, MazeError> {
        let mut maze = Self {
            layout,
            start: Position::flat(0, 0),
            goal: Position::flat(0, 0),
        };
        let (start, goal) = maze.locate_markers()?;
        maze.start = start;
        maze.goal = goal;
        Ok(maze)
    }

    fn locate_markers(&self) -> Result<(Position, Position), MazeError> {
        let mut start = None;
        let mut goal = None;
        for p in self.positions() {
            match self.at(p) {
                Cell::Start => {
                    if start.is_some() {
                        return Err(MazeError::DuplicateStart(p));
                    }
                    start = Some(p);
                }
                Cell::Goal => {
                    if goal.is_some() {
                        return Err(MazeError::DuplicateGoal(p));
                    }
                    goal = Some(p);
                }
                _ => {}
            }
        }
        match (start, goal) {
            (Some(s), Some(g)) => Ok((s, g)),
            (None, _) => Err(MazeError::MissingStart),
            (_, None) => Err(MazeError::MissingGoal),
        }
    }

    fn grid(&self, face: Face) -> Option<&Grid> {
        match &self.layout {
            Layout::Flat(g) => (face == Face::Front).then_some(g),
            Layout::Cube(faces) => Some(&faces[face.index()]),
        }
    }

    fn get(&self, pos: Position) -> Option<Cell> {
        self.grid(pos.face)?.get(pos.row, pos.col)
    }

    /// The cell at `pos`. Panics when `pos` is outside the maze; topologies
    /// never produce such positions.
    pub fn at(&self, pos: Position) -> Cell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} is outside the maze"),
        }
    }

    /// Whether `pos` is a walkable cell. Out-of-range positions are closed.
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Locate a marker cell by scanning the maze in face/row/column order.
    pub fn find(&self, marker: Cell) -> Result<Position, MazeError> {
        self.positions()
            .find(|&p| self.at(p) == marker)
            .ok_or(MazeError::MarkerNotFound(marker))
    }

    /// The start position recorded at construction.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The goal position recorded at construction.
    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Whether this maze is a cube surface.
    pub fn is_cube(&self) -> bool {
        matches!(self.layout, Layout::Cube(_))
    }

    /// Rows per face.
    pub fn rows(&self) -> i32 {
        match &self.layout {
            Layout::Flat(g) => g.rows(),
            Layout::Cube(faces) => faces[0].rows(),
        }
    }

    /// Columns per face.
    pub fn cols(&self) -> i32 {
        match &self.layout {
            Layout::Flat(g) => g.cols(),
            Layout::Cube(faces) => faces[0].cols(),
        }
    }

    /// Number of faces: one for flat mazes, six for cubes.
    pub fn face_count(&self) -> usize {
        match self.layout {
            Layout::Flat(_) => 1,
            Layout::Cube(_) => 6,
        }
    }

    /// Total number of cells across all faces.
    pub fn cell_count(&self) -> usize {
        self.face_count() * (self.rows() * self.cols()) as usize
    }

    /// Total number of walkable cells across all faces.
    pub fn open_count(&self) -> usize {
        self.positions().filter(|&p| self.is_open(p)).count()
    }

    /// Iterate over every position in face/row/column order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let faces: &'static [Face] = match self.layout {
            Layout::Flat(_) => &[Face::Front],
            Layout::Cube(_) => &Face::ALL,
        };
        let (rows, cols) = (self.rows(), self.cols());
        faces.iter().flat_map(move |&face| {
            (0..rows).flat_map(move |r| (0..cols).map(move |c| Position::new(face, r, c)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_3x3() -> Maze {
        let mut g = Grid::new(3, 3);
        g.set(0, 0, Cell::Start);
        g.set(2, 2, Cell::Goal);
        g.set(1, 1, Cell::Wall);
        Maze::flat(g).unwrap()
    }

    #[test]
    fn flat_construction_records_markers() {
        let m = flat_3x3();
        assert_eq!(m.start(), Position::flat(0, 0));
        assert_eq!(m.goal(), Position::flat(2, 2));
        assert!(!m.is_cube());
        assert_eq!(m.face_count(), 1);
        assert_eq!(m.cell_count(), 9);
        assert_eq!(m.open_count(), 8);
    }

    #[test]
    fn at_and_is_open() {
        let m = flat_3x3();
        assert_eq!(m.at(Position::flat(1, 1)), Cell::Wall);
        assert_eq!(m.at(Position::flat(0, 0)), Cell::Start);
        assert!(!m.is_open(Position::flat(1, 1)));
        assert!(m.is_open(Position::flat(2, 2)));
        assert!(!m.is_open(Position::flat(3, 0)));
        assert!(!m.is_open(Position::new(Face::Top, 0, 0)));
    }

    #[test]
    #[should_panic(expected = "outside the maze")]
    fn at_out_of_range_panics() {
        flat_3x3().at(Position::flat(-1, 0));
    }

    #[test]
    fn find_markers() {
        let m = flat_3x3();
        assert_eq!(m.find(Cell::Start).unwrap(), Position::flat(0, 0));
        assert_eq!(m.find(Cell::Goal).unwrap(), Position::flat(2, 2));
        assert_eq!(
            Maze::flat({
                let mut g = Grid::new(2, 2);
                g.set(0, 0, Cell::Start);
                g.set(1, 1, Cell::Goal);
                g
            })
            .unwrap()
            .find(Cell::Wall),
            Err(MazeError::MarkerNotFound(Cell::Wall))
        );
    }

    #[test]
    fn missing_and_duplicate_markers_are_rejected() {
        let g = Grid::new(3, 3);
        assert_eq!(Maze::flat(g.clone()).unwrap_err(), MazeError::MissingStart);

        let mut g1 = g.clone();
        g1.set(0, 0, Cell::Start);
        assert_eq!(Maze::flat(g1).unwrap_err(), MazeError::MissingGoal);

        let mut g2 = g.clone();
        g2.set(0, 0, Cell::Start);
        g2.set(0, 1, Cell::Start);
        g2.set(2, 2, Cell::Goal);
        assert_eq!(
            Maze::flat(g2).unwrap_err(),
            MazeError::DuplicateStart(Position::flat(0, 1))
        );

        let mut g3 = g;
        g3.set(0, 0, Cell::Start);
        g3.set(1, 1, Cell::Goal);
        g3.set(2, 2, Cell::Goal);
        assert_eq!(
            Maze::flat(g3).unwrap_err(),
            MazeError::DuplicateGoal(Position::flat(2, 2))
        );
    }

    #[test]
    fn cube_construction() {
        let mut faces: [Grid; 6] = std::array::from_fn(|_| Grid::new(4, 4));
        faces[Face::Front.index()].set(0, 0, Cell::Start);
        faces[Face::Back.index()].set(3, 3, Cell::Goal);
        let m = Maze::cube(faces).unwrap();
        assert!(m.is_cube());
        assert_eq!(m.face_count(), 6);
        assert_eq!(m.cell_count(), 96);
        assert_eq!(m.start(), Position::new(Face::Front, 0, 0));
        assert_eq!(m.goal(), Position::new(Face::Back, 3, 3));
        assert!(m.is_open(Position::new(Face::Bottom, 2, 2)));
    }

    #[test]
    fn cube_rejects_mismatched_faces() {
        let mut faces: [Grid; 6] = std::array::from_fn(|_| Grid::new(3, 3));
        faces[4] = Grid::new(3, 2);
        assert_eq!(
            Maze::cube(faces).unwrap_err(),
            MazeError::NotSquare { rows: 3, cols: 2 }
        );

        let mut faces: [Grid; 6] = std::array::from_fn(|_| Grid::new(3, 3));
        faces[5] = Grid::new(2, 2);
        assert_eq!(
            Maze::cube(faces).unwrap_err(),
            MazeError::SizeMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn positions_cover_every_cell_once() {
        let m = flat_3x3();
        let all: Vec<_> = m.positions().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::flat(0, 0));
        assert_eq!(all[8], Position::flat(2, 2));
    }
}
