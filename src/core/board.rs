//! The 4x4 tile grid.
//!
//! Cells hold `0` (empty) or a tile value, which is a power of two no
//! smaller than 2. The grid is row-major: `(row, col)` with `(0, 0)` at the
//! top-left and column 3 at the right edge.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Side length of the board.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Is `value` something a cell may hold?
#[inline]
#[must_use]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Fixed-size 4x4 grid of tile values.
///
/// `Board` is a plain value: copying it is cheap and the session hands out
/// copies for inspection. It does not track score or tile count; those
/// belong to the session that owns it.
///
/// ```
/// use rust_2048::core::Board;
///
/// let board = Board::from_rows([
///     [2, 0, 0, 0],
///     [0, 4, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 8],
/// ]);
/// assert_eq!(board[(1, 1)], 4);
/// assert_eq!(board.tile_count(), 3);
/// assert_eq!(board.highest_tile(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board {
        cells: [[0; SIZE]; SIZE],
    };

    /// Build a board from row-major values without validating them.
    ///
    /// Use [`Board::validate`] before trusting caller-supplied values.
    #[must_use]
    pub const fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Value at `(row, col)`, rejecting coordinates outside the grid.
    ///
    /// Coordinates are signed so negative input is reported rather than
    /// wrapped.
    pub fn value_at(&self, row: isize, col: isize) -> Result<u32> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < SIZE && c < SIZE => Ok(self.cells[r][c]),
            _ => Err(EngineError::OutOfRange { row, col }),
        }
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board, or 0 when empty.
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Iterate `(row, col, value)` over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    /// Check that every cell holds 0 or a power of two >= 2.
    pub fn validate(&self) -> Result<()> {
        match self.cells().find(|&(_, _, v)| !is_tile_value(v)) {
            Some((row, col, value)) => Err(EngineError::InvalidTile { row, col, value }),
            None => Ok(()),
        }
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u32 {
        &mut self.cells[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { format!("{:>5}", ".") } else { format!("{v:>5}") })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}
