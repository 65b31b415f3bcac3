//! PlacementAllocator: reserves non-overlapping footprints for items.
//!
//! Each request draws random anchors from the requested category and checks
//! the footprint's bounding box against the placeable floor, retrying up to
//! the attempt budget. A rejected anchor stays eligible and may be drawn
//! again. Nothing is mutated unless a placement is committed.

use crate::classify::*;
use crate::constants::MAX_FOOTPRINT_SIDE;
use crate::error::*;
use crate::graph::*;
use crate::location::*;
use crate::room_data::FloorSource;
use crate::rng::IndexSource;
use fnv::FnvHashSet;
use log::*;
use serde::{Deserialize, Serialize};

/// Requested item size in cells, plus whether a one-cell buffer ring around
/// the item must also be free (and is reserved along with it).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawFootprint")]
pub struct Footprint {
    width: u32,
    height: u32,
    add_offset: bool,
}

#[derive(Deserialize)]
struct RawFootprint {
    width: u32,
    height: u32,
    #[serde(default)]
    add_offset: bool,
}

impl TryFrom<RawFootprint> for Footprint {
    type Error = PlacementError;

    fn try_from(raw: RawFootprint) -> Result<Self, Self::Error> {
        Ok(Footprint::new(raw.width, raw.height)?.with_offset(raw.add_offset))
    }
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> PlacementResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlacementError::ZeroFootprint { width, height });
        }
        if width > MAX_FOOTPRINT_SIDE || height > MAX_FOOTPRINT_SIDE {
            return Err(PlacementError::OversizedFootprint { width, height });
        }

        Ok(Footprint {
            width,
            height,
            add_offset: false,
        })
    }

    pub fn single() -> Self {
        Footprint {
            width: 1,
            height: 1,
            add_offset: false,
        }
    }

    pub fn with_offset(mut self, add_offset: bool) -> Self {
        self.add_offset = add_offset;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn add_offset(&self) -> bool {
        self.add_offset
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Side lengths as grid offsets. `new` bounds both by `MAX_FOOTPRINT_SIDE`.
    fn sides(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    /// Offset ranges `(x, y)` of the checked bounding box, half-open.
    fn box_ranges(&self) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let (w, h) = self.sides();
        if self.add_offset {
            (-1..w + 1, -1..h + 1)
        } else {
            (0..w, 0..h)
        }
    }

    /// Number of cells in the checked bounding box.
    fn box_area(&self) -> u64 {
        if self.add_offset {
            (u64::from(self.width) + 2) * (u64::from(self.height) + 2)
        } else {
            self.area()
        }
    }

    /// Cells of the bounding box anchored at `anchor`, buffer ring included
    /// when `add_offset` is set. The anchor comes first. Cells past the edge
    /// of the `i32` grid are left out.
    pub fn box_cells(&self, anchor: Cell) -> Vec<Cell> {
        let (xs, ys) = self.box_ranges();
        let mut cells = vec![anchor];
        for dx in xs {
            for dy in ys.clone() {
                if (dx, dy) != (0, 0) {
                    cells.extend(anchor.checked_offset(dx, dy));
                }
            }
        }
        cells
    }

    /// Cells the item itself covers when anchored at `anchor`.
    pub fn core_cells(&self, anchor: Cell) -> Vec<Cell> {
        let (w, h) = self.sides();
        (0..w)
            .flat_map(|dx| (0..h).map(move |dy| (dx, dy)))
            .filter_map(|(dx, dy)| anchor.checked_offset(dx, dy))
            .collect()
    }
}

/// Owns one room's classified tiles and hands out placements from them.
/// One allocator per room; it is the only mutator of its sets.
pub struct PlacementAllocator<S: IndexSource> {
    placeable: FnvHashSet<Cell>,
    tiles: ClassifiedTiles,
    reserved: FnvHashSet<Cell>,
    buffer: FnvHashSet<Cell>,
    source: S,
}

impl<S: IndexSource> PlacementAllocator<S> {
    /// `placeable` is the floor minus corridors; `tiles` its classification.
    pub fn new<I>(placeable: I, tiles: ClassifiedTiles, source: S) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        PlacementAllocator {
            placeable: placeable.into_iter().collect(),
            tiles,
            reserved: FnvHashSet::default(),
            buffer: FnvHashSet::default(),
            source,
        }
    }

    /// Build the floor graph, classify the room's placeable cells and wrap
    /// them in an allocator.
    pub fn for_room(room: &dyn FloorSource, source: S) -> PlacementResult<Self> {
        let floor = SpatialGraph::new(room.floor_cells().iter().copied())?;
        let tiles = classify(&floor, room.placeable_cells().iter().copied());

        Ok(Self::new(room.placeable_cells().iter().copied(), tiles, source))
    }

    pub fn tiles(&self) -> &ClassifiedTiles {
        &self.tiles
    }

    /// Cells covered by committed items.
    pub fn reserved(&self) -> &FnvHashSet<Cell> {
        &self.reserved
    }

    /// Buffer ring cells kept clear around committed items.
    pub fn buffer(&self) -> &FnvHashSet<Cell> {
        &self.buffer
    }

    pub fn remaining(&self, placement_type: PlacementType) -> usize {
        self.tiles.len(placement_type)
    }

    /// True once no category has an eligible cell left.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Try to place an item of `footprint` anchored on a `placement_type`
    /// cell. Returns the anchor, or `None` if no valid site was found within
    /// `max_attempts` draws.
    pub fn allocate(
        &mut self,
        placement_type: PlacementType,
        max_attempts: u32,
        footprint: &Footprint,
    ) -> PlacementResult<Option<Cell>> {
        if max_attempts == 0 {
            return Err(PlacementError::ZeroAttempts);
        }

        let eligible_count = self.tiles.len(placement_type);
        if (eligible_count as u64) < footprint.area() {
            trace!(
                "Allocator: {:?} has {} cells, {}x{} cannot fit",
                placement_type,
                eligible_count,
                footprint.width(),
                footprint.height()
            );
            return Ok(None);
        }

        // The set only changes on success, so one sorted snapshot serves
        // every attempt and keeps seeded runs reproducible.
        let mut candidates: Vec<Cell> =
            self.tiles.get(placement_type).iter().copied().collect();
        candidates.sort();

        for attempt in 0..max_attempts {
            let anchor = candidates[self.source.pick(candidates.len())];

            if footprint.area() == 1 {
                self.tiles.remove(placement_type, anchor);
                self.reserved.insert(anchor);
                debug!("Allocator: placed 1x1 {:?} at {}", placement_type, anchor);
                return Ok(Some(anchor));
            }

            match self.validate(anchor, footprint) {
                Ok(cells) => {
                    for cell in &cells {
                        self.tiles.remove_everywhere(*cell);
                    }
                    let core = footprint.core_cells(anchor);
                    let core_set: FnvHashSet<Cell> = core.iter().copied().collect();
                    self.buffer.extend(cells.iter().copied().filter(|c| !core_set.contains(c)));
                    self.reserved.extend(core);
                    debug!(
                        "Allocator: placed {}x{} {:?} at {} after {} attempts, consumed {} cells",
                        footprint.width(),
                        footprint.height(),
                        placement_type,
                        anchor,
                        attempt + 1,
                        cells.len()
                    );
                    return Ok(Some(anchor));
                }
                Err(blocked) => {
                    trace!(
                        "Allocator: anchor {} rejected, {} is blocked",
                        anchor,
                        blocked
                    );
                }
            }
        }

        debug!(
            "Allocator: no site for {}x{} {:?} in {} attempts",
            footprint.width(),
            footprint.height(),
            placement_type,
            max_attempts
        );
        Ok(None)
    }

    /// Check the bounding box at `anchor`. Returns every box cell on success
    /// or the first blocked cell.
    ///
    /// Every box cell must be placeable floor and not under another item.
    /// Core cells must also stay out of other items' buffer rings; rings may
    /// share cells with each other. A box that runs off the grid is blocked
    /// at its anchor.
    fn validate(&self, anchor: Cell, footprint: &Footprint) -> Result<Vec<Cell>, Cell> {
        let cells = footprint.box_cells(anchor);
        if cells.len() as u64 != footprint.box_area() {
            return Err(anchor);
        }
        let (w, h) = footprint.sides();

        for cell in cells.iter().skip(1) {
            let (dx, dy) = (cell.x - anchor.x, cell.y - anchor.y);
            let is_core = (0..w).contains(&dx) && (0..h).contains(&dy);

            if !self.placeable.contains(cell)
                || self.reserved.contains(cell)
                || (is_core && self.buffer.contains(cell))
            {
                return Err(*cell);
            }
        }
        Ok(cells)
    }
}
