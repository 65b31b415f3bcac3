use serde::{Deserialize, Serialize};

/// A discrete grid coordinate. Identity is by value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Offset that stays on the `i32` grid, or `None` past its edge.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    pub fn chebyshev_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl std::ops::Add<(i32, i32)> for Cell {
    type Output = Self;
    fn add(self, other: (i32, i32)) -> Self {
        self.offset(other.0, other.1)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_add_agree() {
        let c = Cell::new(3, -2);
        assert_eq!(c.offset(1, 4), Cell::new(4, 2));
        assert_eq!(c + (1, 4), c.offset(1, 4));
    }

    #[test]
    fn checked_offset_stops_at_grid_edge() {
        let edge = Cell::new(i32::MAX, i32::MIN);
        assert_eq!(edge.checked_offset(1, 0), None);
        assert_eq!(edge.checked_offset(0, -1), None);
        assert_eq!(edge.checked_offset(-1, 1), Some(Cell::new(i32::MAX - 1, i32::MIN + 1)));
    }

    #[test]
    fn distances_across_the_whole_grid() {
        let a = Cell::new(i32::MIN, 0);
        let b = Cell::new(i32::MAX, 1);
        assert_eq!(a.chebyshev_distance(b), u32::MAX);
        assert_eq!(a.manhattan_distance(b), u32::MAX);
    }

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, -5);
        assert_eq!(a.chebyshev_distance(b), 5);
        assert_eq!(a.manhattan_distance(b), 8);
        assert_eq!(b.chebyshev_distance(a), 5);
    }

    #[test]
    fn serializes_with_named_fields() {
        let json = serde_json::to_string(&Cell::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2}"#);
    }
}
