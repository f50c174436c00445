//! Cube-surface topology: six square faces glued into a closed surface.
//!
//! A move off a face edge lands on the adjacent face, with the surviving
//! coordinate remapped by a fixed per-(face, edge) rule. The [`WRAP`]
//! table below is the single source of truth for these transitions; its
//! reciprocity is checked exhaustively in the tests.

use mazecube_core::{Face, Position};

use crate::flat::DIRS;
use crate::traits::Topology;

// ---------------------------------------------------------------------------
// Transition table
// ---------------------------------------------------------------------------

/// The edge a move exits through: row below 0, row past the end, column
/// below 0, column past the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    RowNeg,
    RowPos,
    ColNeg,
    ColPos,
}

/// How the surviving coordinate `k` maps onto a destination coordinate.
#[derive(Copy, Clone, Debug)]
enum Rule {
    /// `k`
    Keep,
    /// `size - 1 - k`
    Flip,
    /// `0`
    Zero,
    /// `size - 1`
    Max,
}

impl Rule {
    #[inline]
    fn apply(self, k: i32, size: i32) -> i32 {
        match self {
            Rule::Keep => k,
            Rule::Flip => size - 1 - k,
            Rule::Zero => 0,
            Rule::Max => size - 1,
        }
    }
}

struct Transition {
    target: Face,
    row: Rule,
    col: Rule,
}

const fn t(target: Face, row: Rule, col: Rule) -> Transition {
    Transition { target, row, col }
}

/// `WRAP[face][edge]` — destination of a move off `face` through `edge`.
///
/// The surviving coordinate is the column for row exits and the row for
/// column exits. Entries are arranged so that every face pair agrees on
/// the shared edge in both directions.
const WRAP: [[Transition; 4]; 6] = [
    // Front
    [
        t(Face::Left, Rule::Max, Rule::Keep),
        t(Face::Right, Rule::Zero, Rule::Keep),
        t(Face::Top, Rule::Keep, Rule::Max),
        t(Face::Bottom, Rule::Keep, Rule::Zero),
    ],
    // Back
    [
        t(Face::Right, Rule::Max, Rule::Keep),
        t(Face::Left, Rule::Zero, Rule::Keep),
        t(Face::Top, Rule::Flip, Rule::Zero),
        t(Face::Bottom, Rule::Flip, Rule::Max),
    ],
    // Left
    [
        t(Face::Back, Rule::Max, Rule::Keep),
        t(Face::Front, Rule::Zero, Rule::Keep),
        t(Face::Top, Rule::Zero, Rule::Keep),
        t(Face::Bottom, Rule::Zero, Rule::Flip),
    ],
    // Right
    [
        t(Face::Front, Rule::Max, Rule::Keep),
        t(Face::Back, Rule::Zero, Rule::Keep),
        t(Face::Top, Rule::Max, Rule::Flip),
        t(Face::Bottom, Rule::Max, Rule::Keep),
    ],
    // Top
    [
        t(Face::Left, Rule::Keep, Rule::Zero),
        t(Face::Right, Rule::Flip, Rule::Zero),
        t(Face::Back, Rule::Flip, Rule::Zero),
        t(Face::Front, Rule::Keep, Rule::Zero),
    ],
    // Bottom
    [
        t(Face::Left, Rule::Flip, Rule::Max),
        t(Face::Right, Rule::Keep, Rule::Max),
        t(Face::Front, Rule::Keep, Rule::Max),
        t(Face::Back, Rule::Flip, Rule::Max),
    ],
];

// ---------------------------------------------------------------------------
// CubeSurface
// ---------------------------------------------------------------------------

/// Topology of six `size × size` faces forming a cube surface.
///
/// Every cell has exactly four neighbors; edge and corner cells reach
/// across to adjacent faces through the [`WRAP`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeSurface {
    size: i32,
}

impl CubeSurface {
    /// Create a topology for faces of the given size.
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "face size must be positive");
        Self { size }
    }

    /// Side length of each face.
    pub fn size(&self) -> i32 {
        self.size
    }

    fn wrap(&self, face: Face, edge: Edge, k: i32) -> Position {
        let tr = &WRAP[face.index()][edge as usize];
        Position::new(
            tr.target,
            tr.row.apply(k, self.size),
            tr.col.apply(k, self.size),
        )
    }
}

impl Topology for CubeSurface {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        debug_assert!(self.contains(p), "{p} outside size-{} cube", self.size);
        for (dr, dc) in DIRS {
            let (row, col) = (p.row + dr, p.col + dc);
            let n = if row < 0 {
                self.wrap(p.face, Edge::RowNeg, p.col)
            } else if row >= self.size {
                self.wrap(p.face, Edge::RowPos, p.col)
            } else if col < 0 {
                self.wrap(p.face, Edge::ColNeg, p.row)
            } else if col >= self.size {
                self.wrap(p.face, Edge::ColPos, p.row)
            } else {
                Position::new(p.face, row, col)
            };
            debug_assert!(self.contains(n), "wrap produced invalid {n}");
            buf.push(n);
        }
    }

    fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.size && p.col >= 0 && p.col < self.size
    }

    fn cell_count(&self) -> usize {
        6 * (self.size * self.size) as usize
    }
}
