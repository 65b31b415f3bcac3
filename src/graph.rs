//! Grid adjacency over a fixed set of floor cells.

use crate::constants::*;
use crate::error::*;
use crate::location::*;
use fnv::FnvHashSet;
use itertools::Itertools;
use pathfinding::directed::bfs::bfs;

/// Immutable set of floor cells answering 4- and 8-connected adjacency
/// queries. Queries never yield a cell outside the floor set.
#[derive(Clone, Debug)]
pub struct SpatialGraph {
    cells: FnvHashSet<Cell>,
}

impl SpatialGraph {
    pub fn new<I>(cells: I) -> PlacementResult<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let cells: FnvHashSet<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(PlacementError::EmptyFloor);
        }

        Ok(SpatialGraph { cells })
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Orthogonal neighbors of `cell` that are floor. `cell` itself does not
    /// need to be floor.
    pub fn neighbors4(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBORS_4
            .iter()
            .filter_map(move |&(dx, dy)| cell.checked_offset(dx, dy))
            .filter(move |n| self.cells.contains(n))
    }

    /// Orthogonal and diagonal neighbors of `cell` that are floor.
    pub fn neighbors8(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBORS_8
            .iter()
            .filter_map(move |&(dx, dy)| cell.checked_offset(dx, dy))
            .filter(move |n| self.cells.contains(n))
    }

    /// Inclusive bounding corners (min, max) of the floor.
    pub fn bounds(&self) -> (Cell, Cell) {
        let (min_x, max_x) = self
            .cells
            .iter()
            .map(|c| c.x)
            .minmax()
            .into_option()
            .unwrap_or((0, 0));
        let (min_y, max_y) = self
            .cells
            .iter()
            .map(|c| c.y)
            .minmax()
            .into_option()
            .unwrap_or((0, 0));

        (Cell::new(min_x, min_y), Cell::new(max_x, max_y))
    }

    /// Shortest 4-connected route from `from` to `to`, both ends included.
    /// Returns `None` if either end is not floor or no route exists.
    pub fn shortest_path(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        bfs(&from, |c| self.neighbors4(*c).collect::<Vec<_>>(), |c| *c == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(width: i32, height: i32) -> SpatialGraph {
        let cells = (0..width).flat_map(|x| (0..height).map(move |y| Cell::new(x, y)));
        SpatialGraph::new(cells).unwrap()
    }

    #[test]
    fn empty_floor_is_rejected() {
        let err = SpatialGraph::new(Vec::<Cell>::new()).unwrap_err();
        assert_eq!(err, PlacementError::EmptyFloor);
    }

    #[test]
    fn duplicates_collapse() {
        let g =
            SpatialGraph::new(vec![Cell::new(0, 0), Cell::new(0, 0), Cell::new(1, 0)]).unwrap();
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn interior_cell_has_full_neighborhood() {
        let g = grid(3, 3);
        assert_eq!(g.neighbors4(Cell::new(1, 1)).count(), 4);
        assert_eq!(g.neighbors8(Cell::new(1, 1)).count(), 8);
    }

    #[test]
    fn corner_neighbors() {
        let g = grid(3, 3);
        let n4: FnvHashSet<Cell> = g.neighbors4(Cell::new(0, 0)).collect();
        assert_eq!(n4.len(), 2);
        assert!(n4.contains(&Cell::new(1, 0)));
        assert!(n4.contains(&Cell::new(0, 1)));
        assert_eq!(g.neighbors8(Cell::new(0, 0)).count(), 3);
    }

    #[test]
    fn query_cell_need_not_be_floor() {
        let g = grid(3, 1);
        let n4: Vec<Cell> = g.neighbors4(Cell::new(1, 1)).collect();
        assert_eq!(n4, vec![Cell::new(1, 0)]);
        assert_eq!(g.neighbors8(Cell::new(1, 1)).count(), 3);
    }

    #[test]
    fn neighbors_at_grid_edge() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        let g = SpatialGraph::new(vec![
            Cell::new(i32::MAX, 0),
            corner,
            Cell::new(i32::MAX - 1, i32::MIN),
            Cell::new(i32::MAX - 1, i32::MIN + 1),
        ])
        .unwrap();

        assert_eq!(g.neighbors4(Cell::new(i32::MAX, 0)).count(), 0);
        assert_eq!(g.neighbors4(corner).count(), 1);
        assert_eq!(g.neighbors8(corner).count(), 2);
    }

    #[test]
    fn bounds_cover_floor() {
        let g =
            SpatialGraph::new(vec![Cell::new(-2, 5), Cell::new(4, 1), Cell::new(0, 3)]).unwrap();
        assert_eq!(g.bounds(), (Cell::new(-2, 1), Cell::new(4, 5)));
    }

    #[test]
    fn shortest_path_walks_around_walls() {
        // ...
        // ##.
        // ...
        let g = SpatialGraph::new(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ])
        .unwrap();

        let path = g.shortest_path(Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(0, 2)));
        assert!(path.windows(2).all(|w| w[0].manhattan_distance(w[1]) == 1));
    }

    #[test]
    fn shortest_path_requires_floor_endpoints() {
        let g = grid(2, 2);
        assert!(g.shortest_path(Cell::new(0, 0), Cell::new(5, 5)).is_none());
        assert_eq!(
            g.shortest_path(Cell::new(0, 0), Cell::new(0, 0)),
            Some(vec![Cell::new(0, 0)])
        );
    }

    proptest! {
        #[test]
        fn neighbors4_subset_of_neighbors8_and_floor(
            cells in proptest::collection::vec((0i32..8, 0i32..8), 1..40),
            qx in -1i32..9,
            qy in -1i32..9,
        ) {
            let g = SpatialGraph::new(cells.into_iter().map(Cell::from)).unwrap();
            let q = Cell::new(qx, qy);
            let n8: FnvHashSet<Cell> = g.neighbors8(q).collect();

            for n in g.neighbors4(q) {
                prop_assert!(n8.contains(&n));
            }
            for n in &n8 {
                prop_assert!(g.contains(*n));
                prop_assert_eq!(n.chebyshev_distance(q), 1);
            }
        }
    }
}
