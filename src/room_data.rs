use crate::location::*;

/// Trait for providing a room's floor to the placement pipeline.
/// Implementations exist for text fixtures (`RoomTerrain`) and host engines.
pub trait FloorSource {
    /// Every walkable cell of the room, corridors included.
    fn floor_cells(&self) -> &[Cell];
    /// Floor cells that items may occupy (the floor minus corridors).
    fn placeable_cells(&self) -> &[Cell];
    /// Reference cell for distance queries, if the room has one.
    fn start_cell(&self) -> Option<Cell> {
        None
    }
}
