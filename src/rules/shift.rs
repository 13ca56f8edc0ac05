//! Shift-merge algorithm.
//!
//! Works on a canonical view of the board in which tiles always slide
//! toward column 3. The direction's coordinate mapping translates every
//! read and write, so the board itself is never rotated.
//!
//! ## Passes
//!
//! Each pass visits the adjacent pairs `(2,3)`, `(1,2)`, `(0,1)` of every
//! row. For each pair:
//!
//! - equal non-zero tiles, neither produced by a merge this shift: the
//!   right tile doubles, the left cell empties
//! - empty right cell, non-empty left cell: the tile slides one step
//! - otherwise nothing
//!
//! Passes repeat until one changes nothing. A merged tile keeps its
//! "already merged" mark while it keeps sliding, so `[2,2,2,2]` becomes
//! `[0,0,4,4]` and never `[0,0,0,8]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Direction, SIZE};

/// A merge performed by a shift, in board coordinates.
///
/// `row`/`col` is where the merged tile rests once the shift settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    pub row: usize,
    pub col: usize,
    /// Value of the tile produced by the merge.
    pub value: u32,
}

/// Everything a shift did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftResult {
    /// At least one tile slid or merged.
    pub changed: bool,
    /// One entry per merge. A 4x4 board allows at most eight per shift.
    pub merges: SmallVec<[Merge; 8]>,
    /// Sum of the merged tile values.
    pub score_gained: u64,
}

impl ShiftResult {
    /// Number of tiles removed from the board by merging.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }
}

/// Canonical-space window onto a board.
struct Canonical<'a> {
    board: &'a mut Board,
    direction: Direction,
    merged: [[bool; SIZE]; SIZE],
}

impl<'a> Canonical<'a> {
    fn new(board: &'a mut Board, direction: Direction) -> Self {
        Self {
            board,
            direction,
            merged: [[false; SIZE]; SIZE],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> u32 {
        self.board[self.direction.to_board(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: u32) {
        self.board[self.direction.to_board(row, col)] = value;
    }

    /// Run one pass over every row. Returns whether anything changed.
    fn pass(&mut self, score: &mut u64) -> bool {
        let mut changed = false;
        for row in 0..SIZE {
            for col in (0..SIZE - 1).rev() {
                let left = self.get(row, col);
                let right = self.get(row, col + 1);
                if left == 0 {
                    continue;
                }

                if left == right && !self.merged[row][col] && !self.merged[row][col + 1] {
                    let value = right * 2;
                    self.set(row, col, 0);
                    self.set(row, col + 1, value);
                    self.merged[row][col + 1] = true;
                    *score += u64::from(value);
                    changed = true;
                } else if right == 0 {
                    self.set(row, col + 1, left);
                    self.set(row, col, 0);
                    self.merged[row][col + 1] = self.merged[row][col];
                    self.merged[row][col] = false;
                    changed = true;
                }
            }
        }
        changed
    }

    fn merges(&self) -> SmallVec<[Merge; 8]> {
        let mut out = SmallVec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.merged[row][col] {
                    let (r, c) = self.direction.to_board(row, col);
                    out.push(Merge {
                        row: r,
                        col: c,
                        value: self.get(row, col),
                    });
                }
            }
        }
        out
    }
}

/// Slide and merge every tile toward `direction` until stable.
///
/// Does not spawn; the caller decides what to do with the result.
///
/// ```
/// use rust_2048::core::{Board, Direction};
/// use rust_2048::rules::shift;
///
/// let mut board = Board::from_rows([
///     [2, 2, 2, 2],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let result = shift(&mut board, Direction::Right);
/// assert_eq!(board.rows()[0], [0, 0, 4, 4]);
/// assert_eq!(result.merge_count(), 2);
/// assert_eq!(result.score_gained, 8);
/// ```
pub fn shift(board: &mut Board, direction: Direction) -> ShiftResult {
    let mut view = Canonical::new(board, direction);
    let mut score_gained = 0;
    let mut changed = false;

    while view.pass(&mut score_gained) {
        changed = true;
    }

    ShiftResult {
        changed,
        merges: view.merges(),
        score_gained,
    }
}

/// Would shifting toward `direction` change the board?
#[must_use]
pub fn can_shift(board: &Board, direction: Direction) -> bool {
    let mut probe = *board;
    shift(&mut probe, direction).changed
}
