//! Error types for floor construction and placement requests.
//!
//! Failing to find a placement is not an error; allocation reports that as
//! `Ok(None)`. These variants cover malformed input rejected at the boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("floor must contain at least one cell")]
    EmptyFloor,

    #[error("footprint dimensions must be positive, got {width}x{height}")]
    ZeroFootprint { width: u32, height: u32 },

    #[error("footprint {width}x{height} does not fit the cell grid")]
    OversizedFootprint { width: u32, height: u32 },

    #[error("attempt budget must be positive")]
    ZeroAttempts,

    #[error("invalid placement config: {reason}")]
    InvalidConfig { reason: String },

    #[error("unexpected glyph '{glyph}' at line {line}, column {column}")]
    MalformedFloor {
        line: usize,
        column: usize,
        glyph: char,
    },
}

pub type PlacementResult<T> = Result<T, PlacementError>;
