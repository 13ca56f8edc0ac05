//! Core engine types: board, directions, RNG, configuration, errors.
//!
//! These are the building blocks the rules and the session are written
//! against. None of them hold game progress on their own.

pub mod board;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use board::{is_tile_value, Board, CELL_COUNT, SIZE};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{EngineConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_INITIAL_TILES};
pub use error::{EngineError, Result};
