//! Game sessions.
//!
//! A [`Game`] owns everything one game needs: the board, its tile count,
//! the score, the status, and the random source. It is the only place the
//! rules are sequenced into a full move:
//!
//! 1. shift toward the requested direction
//! 2. spawn one tile if anything changed
//! 3. decide whether play can continue

mod game;

pub use game::{Game, MoveOutcome};
