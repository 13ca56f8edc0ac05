//! Engine errors.

use thiserror::Error;

/// Errors surfaced by the board engine.
///
/// Moves are total over a valid board and never fail; only cell queries,
/// caller-supplied starting positions, and configs can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A cell query used coordinates outside `[0, 3] x [0, 3]`.
    #[error("cell ({row}, {col}) is outside the 4x4 board")]
    OutOfRange { row: isize, col: isize },

    /// A starting position held a value that is neither 0 nor a power of two.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// An `EngineConfig` field is outside its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
