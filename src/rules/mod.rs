//! Game rules: shifting, spawning, and end-of-game detection.
//!
//! All three operate on a bare [`Board`](crate::core::Board). Score, tile
//! count, and status live in the session, which sequences these calls.

mod shift;
mod spawn;
mod terminal;

pub use shift::{can_shift, shift, Merge, ShiftResult};
pub use spawn::{spawn_tile, Spawn};
pub use terminal::{can_continue, GameStatus};
