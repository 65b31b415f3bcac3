//! Partition of placeable cells into open-space and near-wall categories by
//! local floor density.

use crate::constants::*;
use crate::graph::*;
use crate::location::*;
use fnv::FnvHashSet;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PlacementType {
    /// All 8 surrounding cells are floor.
    OpenSpace,
    /// At least one orthogonal neighbor is missing.
    NearWall,
}

impl PlacementType {
    pub const ALL: [PlacementType; 2] = [PlacementType::OpenSpace, PlacementType::NearWall];
}

/// Eligible cells per placement category. Both categories always exist and
/// no cell is in both at once.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedTiles {
    open_space: FnvHashSet<Cell>,
    near_wall: FnvHashSet<Cell>,
}

impl ClassifiedTiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, placement_type: PlacementType) -> &FnvHashSet<Cell> {
        match placement_type {
            PlacementType::OpenSpace => &self.open_space,
            PlacementType::NearWall => &self.near_wall,
        }
    }

    fn get_mut(&mut self, placement_type: PlacementType) -> &mut FnvHashSet<Cell> {
        match placement_type {
            PlacementType::OpenSpace => &mut self.open_space,
            PlacementType::NearWall => &mut self.near_wall,
        }
    }

    pub fn len(&self, placement_type: PlacementType) -> usize {
        self.get(placement_type).len()
    }

    pub fn total(&self) -> usize {
        self.open_space.len() + self.near_wall.len()
    }

    pub fn contains(&self, placement_type: PlacementType, cell: Cell) -> bool {
        self.get(placement_type).contains(&cell)
    }

    pub fn category_of(&self, cell: Cell) -> Option<PlacementType> {
        PlacementType::ALL
            .into_iter()
            .find(|t| self.contains(*t, cell))
    }

    /// Add `cell` under `placement_type`, taking it out of the other category.
    pub fn insert(&mut self, placement_type: PlacementType, cell: Cell) {
        self.remove_everywhere(cell);
        self.get_mut(placement_type).insert(cell);
    }

    pub fn remove(&mut self, placement_type: PlacementType, cell: Cell) -> bool {
        self.get_mut(placement_type).remove(&cell)
    }

    /// Remove `cell` from every category. Returns true if it was present.
    pub fn remove_everywhere(&mut self, cell: Cell) -> bool {
        let a = self.open_space.remove(&cell);
        let b = self.near_wall.remove(&cell);
        a || b
    }

    pub fn is_empty(&self) -> bool {
        self.open_space.is_empty() && self.near_wall.is_empty()
    }
}

/// Classify each placeable cell by how many of its neighbors in `floor` are
/// floor. `floor` must be the full floor (corridors included) so corridors
/// count toward density.
///
/// Near-wall cells whose 4 orthogonal neighbors are all floor only touch a
/// wall at a corner and are left out of both categories.
pub fn classify<I>(floor: &SpatialGraph, placeable: I) -> ClassifiedTiles
where
    I: IntoIterator<Item = Cell>,
{
    let mut tiles = ClassifiedTiles::new();
    let mut excluded = 0usize;

    for cell in placeable {
        let placement_type = if floor.neighbors8(cell).count() == OPEN_SPACE_NEIGHBORS {
            PlacementType::OpenSpace
        } else {
            PlacementType::NearWall
        };

        if placement_type == PlacementType::NearWall && floor.neighbors4(cell).count() == 4 {
            excluded += 1;
            continue;
        }

        tiles.insert(placement_type, cell);
    }

    debug!(
        "Classified tiles: open_space={}, near_wall={}, excluded={}",
        tiles.len(PlacementType::OpenSpace),
        tiles.len(PlacementType::NearWall),
        excluded
    );

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room_data::FloorSource;
    use crate::terrain::RoomTerrain;
    use proptest::prelude::*;

    fn classify_room(text: &str) -> ClassifiedTiles {
        let room = RoomTerrain::from_ascii(text).unwrap();
        let graph = SpatialGraph::new(room.floor_cells().iter().copied()).unwrap();
        classify(&graph, room.placeable_cells().iter().copied())
    }

    #[test]
    fn single_row_is_all_near_wall() {
        let tiles = classify_room(".....");
        assert_eq!(tiles.len(PlacementType::OpenSpace), 0);
        assert_eq!(tiles.len(PlacementType::NearWall), 5);
    }

    #[test]
    fn five_by_five_room() {
        let tiles = classify_room(".....\n.....\n.....\n.....\n.....");

        // Interior 3x3 is open; the 16 border cells touch the outside.
        assert_eq!(tiles.len(PlacementType::OpenSpace), 9);
        assert_eq!(tiles.len(PlacementType::NearWall), 16);
        assert_eq!(tiles.category_of(Cell::new(2, 2)), Some(PlacementType::OpenSpace));
        assert_eq!(tiles.category_of(Cell::new(0, 0)), Some(PlacementType::NearWall));
    }

    #[test]
    fn corner_only_wall_contact_is_excluded() {
        // (1, 1) has all 4 orthogonal neighbors but (0, 0) is a wall.
        let tiles = classify_room("#..\n...\n...");

        assert_eq!(tiles.category_of(Cell::new(1, 1)), None);
        assert_eq!(tiles.total(), 7);
    }

    #[test]
    fn corridors_count_as_floor_but_are_not_placeable() {
        let tiles = classify_room("CCC\nC.C\nCCC");

        assert_eq!(tiles.get(PlacementType::OpenSpace).len(), 1);
        assert!(tiles.contains(PlacementType::OpenSpace, Cell::new(1, 1)));
        assert_eq!(tiles.len(PlacementType::NearWall), 0);
    }

    #[test]
    fn remove_everywhere_clears_both() {
        let mut tiles = ClassifiedTiles::new();
        tiles.insert(PlacementType::NearWall, Cell::new(0, 0));
        tiles.insert(PlacementType::OpenSpace, Cell::new(0, 0));

        assert_eq!(tiles.category_of(Cell::new(0, 0)), Some(PlacementType::OpenSpace));
        assert!(!tiles.contains(PlacementType::NearWall, Cell::new(0, 0)));
        assert!(tiles.remove_everywhere(Cell::new(0, 0)));
        assert!(tiles.is_empty());
    }

    proptest! {
        #[test]
        fn categories_are_disjoint_and_follow_rules(
            cells in proptest::collection::vec((0i32..7, 0i32..7), 1..45),
            corridor_mask in proptest::collection::vec(any::<bool>(), 45),
        ) {
            let graph = SpatialGraph::new(cells.iter().copied().map(Cell::from)).unwrap();
            let mut floor: Vec<Cell> = graph.cells().collect();
            floor.sort();
            let placeable: Vec<Cell> = floor
                .iter()
                .zip(corridor_mask.iter().cycle())
                .filter(|(_, corridor)| !**corridor)
                .map(|(c, _)| *c)
                .collect();

            let tiles = classify(&graph, placeable.iter().copied());

            for c in &placeable {
                let n8 = graph.neighbors8(*c).count();
                let n4 = graph.neighbors4(*c).count();
                let open = tiles.contains(PlacementType::OpenSpace, *c);
                let near = tiles.contains(PlacementType::NearWall, *c);

                prop_assert!(!(open && near));
                if n8 == 8 {
                    prop_assert!(open);
                } else if n4 == 4 {
                    prop_assert!(!open && !near);
                } else {
                    prop_assert!(near);
                }
            }
            prop_assert!(tiles.total() <= placeable.len());
        }
    }
}
