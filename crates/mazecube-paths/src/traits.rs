use mazecube_core::Position;

/// Neighbor resolution for a maze layout.
///
/// A topology is pure: it never returns an out-of-range position, never
/// omits a valid one, and its adjacency is reciprocal (`b` neighbors `a`
/// whenever `a` neighbors `b`). Walls are not its concern; searches filter
/// neighbors against the maze separately.
pub trait Topology {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` first.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);

    /// Whether `p` addresses a cell of this topology.
    fn contains(&self, p: Position) -> bool;

    /// Total number of addressable cells, used to bound iterative
    /// deepening.
    fn cell_count(&self) -> usize;
}
