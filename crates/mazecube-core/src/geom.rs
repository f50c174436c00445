//! Geometry primitives: [`Face`] and [`Position`].
//!
//! A flat maze occupies a single face; a cube maze glues six faces into a
//! closed surface. Positions address cells on either layout uniformly.

use std::fmt;

// ---------------------------------------------------------------------------
// Face
// ---------------------------------------------------------------------------

/// One of the six square grids forming the surface of a cube maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Stable index in `0..6`, usable for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name of the face.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell address: a face plus a row/column on that face.
///
/// Equality and hashing are structural, so a `Position` can key maps and
/// sets directly. Flat mazes pin every position to [`Face::Front`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub face: Face,
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position on the given face.
    #[inline]
    pub const fn new(face: Face, row: i32, col: i32) -> Self {
        Self { face, row, col }
    }

    /// Create a position on the single face used by flat mazes.
    #[inline]
    pub const fn flat(row: i32, col: i32) -> Self {
        Self::new(Face::Front, row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.face, self.row, self.col)
    }
}
