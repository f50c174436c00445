//! Maze layouts parsed from text.
//!
//! Each character maps to one cell: `#` is a wall, `.` or a space is
//! open, `O` marks the start and `X` the goal. Lines must all share one
//! width.

use std::fmt;

use mazecube_core::{Cell, Grid, Maze, MazeError};

/// Errors from layout parsing and maze assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A line's width differs from the first line's.
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no cell meaning.
    InvalidGlyph { ch: char, row: usize, col: usize },
    /// The parsed layout violates a maze invariant.
    Maze(MazeError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedLine {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, row, col } => {
                write!(f, "layout contains invalid glyph {ch:?} at ({row}, {col})")
            }
            Self::Maze(e) => write!(f, "parsed layout is not a valid maze: {e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for GenError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

fn cell_for(ch: char) -> Option<Cell> {
    match ch {
        '#' => Some(Cell::Wall),
        '.' | ' ' => Some(Cell::Open),
        'O' => Some(Cell::Start),
        'X' => Some(Cell::Goal),
        _ => None,
    }
}

fn grid_from_text(text: &str) -> Result<Grid, GenError> {
    let lines: Vec<&str> = text.trim_matches('\n').lines().collect();
    let cols = lines.first().map_or(0, |l| l.chars().count());
    let mut grid = Grid::new(lines.len() as i32, cols as i32);
    for (r, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(GenError::RaggedLine {
                line: r,
                expected: cols,
                found,
            });
        }
        for (c, ch) in line.chars().enumerate() {
            let cell = cell_for(ch).ok_or(GenError::InvalidGlyph { ch, row: r, col: c })?;
            grid.set(r as i32, c as i32, cell);
        }
    }
    Ok(grid)
}

/// Parse a flat maze from an ASCII layout.
pub fn from_text(text: &str) -> Result<Maze, GenError> {
    Ok(Maze::flat(grid_from_text(text)?)?)
}

/// Parse a cube maze from six face layouts, given in
/// front/back/left/right/top/bottom order.
pub fn cube_from_text(faces: [&str; 6]) -> Result<Maze, GenError> {
    let [front, back, left, right, top, bottom] = faces;
    Ok(Maze::cube([
        grid_from_text(front)?,
        grid_from_text(back)?,
        grid_from_text(left)?,
        grid_from_text(right)?,
        grid_from_text(top)?,
        grid_from_text(bottom)?,
    ])?)
}
