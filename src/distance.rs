//! Hop-distance labeling from a start cell.
//!
//! Breadth-first over 4-connected floor steps. Every cell receives its label
//! exactly once, the first time it is dequeued, from the label of the cell
//! that discovered it. Since all steps cost the same, FIFO order makes that
//! first label the minimum hop count.

use crate::graph::*;
use crate::location::*;
use fnv::{FnvHashMap, FnvHashSet};
use log::*;
use std::collections::VecDeque;

/// Mapping from each reachable cell to its hop distance from `start`.
/// Built fresh per query and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    start: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl DistanceMap {
    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.distances.contains_key(&cell)
    }

    /// Number of labeled cells, the start included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.distances.iter().map(|(c, d)| (*c, *d))
    }

    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// Distance scaled into `0.0..=1.0` by the largest label, for color ramps.
    pub fn normalized(&self, cell: Cell) -> Option<f32> {
        let d = self.get(cell)?;
        if self.max_distance == 0 {
            Some(0.0)
        } else {
            Some(d as f32 / self.max_distance as f32)
        }
    }

    /// Cells sharing the largest label, sorted.
    pub fn farthest(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .iter()
            .filter(|(_, d)| *d == self.max_distance)
            .map(|(c, _)| c)
            .collect();
        cells.sort();
        cells
    }

    /// Cells no more than `max` steps away, sorted.
    pub fn cells_within(&self, max: u32) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .iter()
            .filter(|(_, d)| *d <= max)
            .map(|(c, _)| c)
            .collect();
        cells.sort();
        cells
    }
}

/// Label every cell reachable from `start` with its 4-connected hop count.
///
/// `start` is labeled 0 directly and its floor neighbors seed the queue, so
/// `start` itself does not have to be a floor cell. Cells that cannot be
/// reached are absent from the result.
pub fn label_distances(graph: &SpatialGraph, start: Cell) -> DistanceMap {
    let mut distances: FnvHashMap<Cell, u32> = FnvHashMap::default();
    let mut discovered: FnvHashSet<Cell> = FnvHashSet::default();
    let mut queue: VecDeque<(Cell, Cell)> = VecDeque::new();

    distances.insert(start, 0);
    discovered.insert(start);

    for n in graph.neighbors4(start) {
        discovered.insert(n);
        queue.push_back((n, start));
    }

    let mut max_distance = 0u32;

    while let Some((cell, parent)) = queue.pop_front() {
        // The parent was dequeued (or is the start) before this cell.
        let next_dist = distances[&parent] + 1;
        distances.insert(cell, next_dist);
        max_distance = max_distance.max(next_dist);

        for n in graph.neighbors4(cell) {
            if discovered.insert(n) {
                queue.push_back((n, cell));
            }
        }
    }

    debug!(
        "Labeled {} cells from {} (floor={}, max_distance={})",
        distances.len(),
        start,
        graph.len(),
        max_distance
    );

    DistanceMap {
        start,
        distances,
        max_distance,
    }
}
