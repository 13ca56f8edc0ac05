//! Move directions and the canonical coordinate mapping.
//!
//! The shift-merge algorithm is written once, always sliding toward
//! column 3 of a *canonical* grid. Each direction defines a pure mapping
//! between canonical coordinates and board coordinates:
//!
//! | Direction | canonical `(r, c)` -> board     |
//! |-----------|---------------------------------|
//! | Right     | `(r, c)`                        |
//! | Left      | `(r, 3 - c)`                    |
//! | Down      | `(c, r)`                        |
//! | Up        | `(3 - c, r)`                    |
//!
//! `to_canonical` is the exact inverse of `to_board`, so no cell is lost or
//! reordered along the axis perpendicular to the move.

use serde::{Deserialize, Serialize};

use super::board::SIZE;

const LAST: usize = SIZE - 1;

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a canonical-space cell to the board cell it stands for.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// // Column 3 of canonical space is the edge tiles slide toward.
    /// assert_eq!(Direction::Right.to_board(0, 3), (0, 3));
    /// assert_eq!(Direction::Left.to_board(0, 3), (0, 0));
    /// assert_eq!(Direction::Down.to_board(0, 3), (3, 0));
    /// assert_eq!(Direction::Up.to_board(0, 3), (0, 0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn to_board(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Right => (row, col),
            Direction::Left => (row, LAST - col),
            Direction::Down => (col, row),
            Direction::Up => (LAST - col, row),
        }
    }

    /// Map a board cell into canonical space. Inverse of [`Direction::to_board`].
    #[inline]
    #[must_use]
    pub const fn to_canonical(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Right => (row, col),
            Direction::Left => (row, LAST - col),
            Direction::Down => (col, row),
            Direction::Up => (col, LAST - row),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
