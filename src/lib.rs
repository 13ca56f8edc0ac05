//! # rust-2048
//!
//! Rules engine for the 4x4 sliding-tile merge puzzle.
//!
//! Tiles holding powers of two slide toward one edge, equal neighbours
//! merge into their sum, a new 2 or 4 appears after every move that changed
//! the board, and the game ends when no move can change it.
//!
//! ## Design Principles
//!
//! 1. **One shift, four directions**: The merge algorithm only ever slides
//!    toward column 3. Each direction is a pure coordinate mapping into
//!    that canonical space.
//!
//! 2. **Session-owned state**: Board, tile count, and score belong to a
//!    [`Game`] value. Nothing is global.
//!
//! 3. **Injected randomness**: Spawning draws from a [`RandomSource`], so
//!    any game can be replayed from a seed or a script.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `rules`: Shift-merge, spawn policy, terminal-state detection
//! - `session`: The `Game` session exposing moves and queries
//!
//! Rendering and input handling are left to the caller; see the
//! `play_cli` binary for a minimal console front-end.

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, EngineConfig, EngineError, GameRng, GameRngState, RandomSource, Result,
    ScriptedRng,
};

pub use crate::rules::{GameStatus, Merge, ShiftResult, Spawn};

pub use crate::session::{Game, MoveOutcome};
