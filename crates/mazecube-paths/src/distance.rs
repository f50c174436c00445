//! Distance estimates between positions.
//!
//! Heuristics compare row/column offsets only; face identity is ignored,
//! so estimates are exact within one face and projections elsewhere.

use std::fmt;

use mazecube_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Octile distance: diagonal moves cost √2, straight moves cost 1.
#[inline]
pub fn octile(a: Position, b: Position) -> f64 {
    let dr = (a.row - b.row).abs() as f64;
    let dc = (a.col - b.col).abs() as f64;
    dr.max(dc) + (std::f64::consts::SQRT_2 - 1.0) * dr.min(dc)
}

/// Selector for the estimate used by informed searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Heuristic {
    /// All selectable heuristics.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Octile,
    ];

    /// Estimate the remaining distance from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Position, b: Position) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(a, b) as f64,
            Heuristic::Euclidean => euclidean(a, b),
            Heuristic::Chebyshev => chebyshev(a, b) as f64,
            Heuristic::Octile => octile(a, b),
        }
    }

    /// Lowercase name of the heuristic.
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
