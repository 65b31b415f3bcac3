use crate::error::*;
use crate::location::*;
use crate::room_data::FloorSource;
use bitflags::*;
use fnv::FnvHashMap;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        const NONE = 0;
        const FLOOR = 1;
        const CORRIDOR = 2;
    }
}

/// Floor layout of a single room: every walkable cell, which of those are
/// corridor cells, and an optional start cell.
///
/// Corridor cells count as floor for adjacency but are never placeable.
#[derive(Clone, Debug)]
pub struct RoomTerrain {
    tiles: FnvHashMap<Cell, TileFlags>,
    floor: Vec<Cell>,
    placeable: Vec<Cell>,
    start: Option<Cell>,
}

impl RoomTerrain {
    /// Build a room from its floor cells and the subset that are corridors.
    /// Corridor cells not listed in `floor` are added to the floor.
    pub fn new<F, C>(floor: F, corridors: C) -> Self
    where
        F: IntoIterator<Item = Cell>,
        C: IntoIterator<Item = Cell>,
    {
        let mut tiles: FnvHashMap<Cell, TileFlags> = FnvHashMap::default();

        for cell in floor {
            *tiles.entry(cell).or_insert(TileFlags::NONE) |= TileFlags::FLOOR;
        }
        for cell in corridors {
            let flags = tiles.entry(cell).or_insert(TileFlags::NONE);
            *flags |= TileFlags::FLOOR | TileFlags::CORRIDOR;
        }

        Self::from_tiles(tiles, None)
    }

    /// Parse a room from a text grid. Rows are `y`, columns are `x`.
    ///
    /// `.` floor, `C` corridor, `S` floor start cell, `#` or space wall.
    pub fn from_ascii(text: &str) -> PlacementResult<Self> {
        let mut tiles: FnvHashMap<Cell, TileFlags> = FnvHashMap::default();
        let mut start = None;

        for (y, line) in text.lines().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                let flags = match glyph {
                    '.' => TileFlags::FLOOR,
                    'C' => TileFlags::FLOOR | TileFlags::CORRIDOR,
                    'S' => {
                        start = Some(cell);
                        TileFlags::FLOOR
                    }
                    '#' | ' ' => continue,
                    _ => {
                        return Err(PlacementError::MalformedFloor {
                            line: y + 1,
                            column: x + 1,
                            glyph,
                        })
                    }
                };
                tiles.insert(cell, flags);
            }
        }

        Ok(Self::from_tiles(tiles, start))
    }

    fn from_tiles(tiles: FnvHashMap<Cell, TileFlags>, start: Option<Cell>) -> Self {
        let mut floor: Vec<Cell> = tiles.keys().copied().collect();
        floor.sort();

        let placeable = floor
            .iter()
            .copied()
            .filter(|c| !tiles[c].contains(TileFlags::CORRIDOR))
            .collect();

        RoomTerrain {
            tiles,
            floor,
            placeable,
            start,
        }
    }

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    pub fn get(&self, cell: Cell) -> TileFlags {
        self.tiles.get(&cell).copied().unwrap_or(TileFlags::NONE)
    }

    pub fn is_floor(&self, cell: Cell) -> bool {
        self.get(cell).contains(TileFlags::FLOOR)
    }

    pub fn is_corridor(&self, cell: Cell) -> bool {
        self.get(cell).contains(TileFlags::CORRIDOR)
    }
}

impl FloorSource for RoomTerrain {
    fn floor_cells(&self) -> &[Cell] {
        &self.floor
    }

    fn placeable_cells(&self) -> &[Cell] {
        &self.placeable
    }

    fn start_cell(&self) -> Option<Cell> {
        self.start
    }
}
