pub mod allocator;
pub mod classify;
pub mod config;
pub mod constants;
pub mod decorate;
pub mod distance;
pub mod error;
pub mod graph;
pub mod location;
pub mod rng;
pub mod room_data;
pub mod terrain;

pub mod visual;
pub use visual::*;

pub use allocator::{Footprint, PlacementAllocator};
pub use classify::{classify, ClassifiedTiles, PlacementType};
pub use config::PlacementConfig;
pub use decorate::{decorate, decorate_room, DecorationReport, ItemSpec, Placement};
pub use distance::{label_distances, DistanceMap};
pub use error::{PlacementError, PlacementResult};
pub use graph::SpatialGraph;
pub use location::Cell;
pub use rng::{IndexSource, RngIndexSource};
pub use room_data::FloorSource;
pub use terrain::{RoomTerrain, TileFlags};
