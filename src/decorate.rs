//! Batch decoration: places a list of requested items into one room.
//!
//! Items are placed largest-first so big pieces see the most open floor.
//! Single-cell wall items fall back to open space when the walls are full.

use crate::allocator::*;
use crate::classify::*;
use crate::config::*;
use crate::error::*;
use crate::location::*;
use crate::rng::*;
use crate::room_data::FloorSource;
use fnv::FnvHashMap;
use log::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A request for `quantity` copies of one item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub placement_type: PlacementType,
    pub footprint: Footprint,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Overrides `PlacementConfig::default_attempts`.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

fn default_quantity() -> u32 {
    1
}

impl ItemSpec {
    pub fn new(
        name: impl Into<String>,
        placement_type: PlacementType,
        footprint: Footprint,
    ) -> Self {
        ItemSpec {
            name: name.into(),
            placement_type,
            footprint,
            quantity: 1,
            max_attempts: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// A committed item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub anchor: Cell,
    pub placement_type: PlacementType,
    pub footprint: Footprint,
    /// Cells the item covers, buffer ring excluded.
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default)]
pub struct DecorationReport {
    pub placements: Vec<Placement>,
    /// Copies that could not be placed, by item name.
    pub unplaced: FnvHashMap<String, u32>,
}

impl DecorationReport {
    pub fn placed_count(&self, name: &str) -> usize {
        self.placements.iter().filter(|p| p.name == name).count()
    }

    pub fn unplaced_count(&self, name: &str) -> u32 {
        self.unplaced.get(name).copied().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Place every requested item through `allocator`.
pub fn decorate<S: IndexSource>(
    allocator: &mut PlacementAllocator<S>,
    items: &[ItemSpec],
    config: &PlacementConfig,
) -> PlacementResult<DecorationReport> {
    config.validate()?;

    let mut order: Vec<&ItemSpec> = items.iter().collect();
    order.sort_by_key(|item| Reverse(item.footprint.area()));

    let mut report = DecorationReport::default();

    for item in order {
        let large = item.footprint.area() >= u64::from(config.large_item_area);
        let footprint = if config.buffer_large_items && large {
            item.footprint.with_offset(true)
        } else {
            item.footprint
        };
        let attempts = item.max_attempts.unwrap_or(config.default_attempts);

        for placed in 0..item.quantity {
            if allocator.is_empty() {
                *report.unplaced.entry(item.name.clone()).or_insert(0) += item.quantity - placed;
                break;
            }

            let mut found = allocator
                .allocate(item.placement_type, attempts, &footprint)?
                .map(|anchor| (anchor, item.placement_type));

            let wall_single =
                item.placement_type == PlacementType::NearWall && footprint.area() == 1;
            if found.is_none() && wall_single {
                found = allocator
                    .allocate(PlacementType::OpenSpace, attempts, &footprint)?
                    .map(|anchor| (anchor, PlacementType::OpenSpace));
            }

            match found {
                Some((anchor, placement_type)) => report.placements.push(Placement {
                    name: item.name.clone(),
                    anchor,
                    placement_type,
                    footprint,
                    cells: footprint.core_cells(anchor),
                }),
                None => *report.unplaced.entry(item.name.clone()).or_insert(0) += 1,
            }
        }
    }

    if !report.is_complete() {
        warn!(
            "Decoration left items unplaced: {:?} (placed {})",
            report.unplaced,
            report.placements.len()
        );
    }

    Ok(report)
}

/// Classify `room`, seed an allocator from `config` and place `items`.
pub fn decorate_room(
    room: &dyn FloorSource,
    items: &[ItemSpec],
    config: &PlacementConfig,
) -> PlacementResult<DecorationReport> {
    let source = match config.seed {
        Some(seed) => RngIndexSource::seeded(seed),
        None => RngIndexSource::from_entropy(),
    };
    let mut allocator = PlacementAllocator::for_room(room, source)?;

    decorate(&mut allocator, items, config)
}
