//! Dijkstra's algorithm.

use std::collections::BinaryHeap;

use mazecube_core::{Maze, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::result::{HeapEntry, SearchResult, reconstruct};
use crate::traits::Topology;

/// Dijkstra's algorithm from `start` to `goal`.
///
/// Expands the frontier in order of accumulated cost (unit edge weights
/// here), re-relaxing a node whenever a strictly cheaper route appears.
/// Cost ties break by insertion order.
pub fn dijkstra<T: Topology + ?Sized>(
    maze: &Maze,
    topo: &T,
    start: Position,
    goal: Position,
) -> SearchResult {
    let mut open = BinaryHeap::new();
    let mut g_score: FxHashMap<Position, usize> = FxHashMap::from_iter([(start, 0)]);
    let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
    let mut visited = FxHashSet::default();
    let mut nbuf = Vec::with_capacity(4);
    let mut seq: u64 = 0;
    let mut steps = 0;

    open.push(HeapEntry {
        priority: 0.0,
        seq,
        pos: start,
    });
    seq += 1;

    while let Some(entry) = open.pop() {
        let current = entry.pos;
        if !visited.insert(current) {
            continue;
        }
        steps += 1;
        if current == goal {
            return SearchResult::success(reconstruct(&parent, start, goal), steps, visited);
        }
        let current_g = g_score[&current];

        nbuf.clear();
        topo.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if visited.contains(&n) || !maze.is_open(n) {
                continue;
            }
            let tentative = current_g + 1;
            if g_score.get(&n).is_none_or(|&g| tentative < g) {
                g_score.insert(n, tentative);
                parent.insert(n, current);
                open.push(HeapEntry {
                    priority: tentative as f64,
                    seq,
                    pos: n,
                });
                seq += 1;
            }
        }
    }
    SearchResult::exhausted(steps, visited)
}
