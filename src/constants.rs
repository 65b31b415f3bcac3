/// Neighbor offsets for 4-directional (cardinal) adjacency.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Neighbor offsets for 8-directional adjacency.
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// A cell is open space only when every one of its 8 neighbors is floor.
pub const OPEN_SPACE_NEIGHBORS: usize = 8;

/// Attempt budget used when neither the caller nor the item overrides it.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Items at least this many cells in area get a buffer ring by default.
pub const DEFAULT_LARGE_ITEM_AREA: u32 = 4;

/// Largest footprint side. A buffered box of this side still spans a valid
/// `i32` offset range.
pub const MAX_FOOTPRINT_SIDE: u32 = (i32::MAX - 1) as u32;
