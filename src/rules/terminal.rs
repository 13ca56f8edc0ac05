//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, CELL_COUNT, SIZE};

/// Where a session is in its lifecycle.
///
/// `Playing` is initial. `Over` is terminal: once reached, moves are
/// refused and the board stays as it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Over,
}

impl GameStatus {
    /// Status implied by a continuability verdict.
    #[must_use]
    pub fn from_verdict(can_continue: bool) -> Self {
        if can_continue {
            GameStatus::Playing
        } else {
            GameStatus::Over
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self == GameStatus::Over
    }
}

/// Can any move still change the board?
///
/// With an empty cell some move always exists. A full board can continue
/// only while two 4-adjacent cells hold the same value.
///
/// ```
/// use rust_2048::core::Board;
/// use rust_2048::rules::can_continue;
///
/// let stuck = Board::from_rows([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ]);
/// assert!(!can_continue(&stuck, 16));
/// ```
#[must_use]
pub fn can_continue(board: &Board, tile_count: usize) -> bool {
    if tile_count < CELL_COUNT {
        return true;
    }

    board.cells().any(|(row, col, value)| {
        (row + 1 < SIZE && board[(row + 1, col)] == value)
            || (col + 1 < SIZE && board[(row, col + 1)] == value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKER: [[u32; 4]; 4] = [
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ];

    #[test]
    fn test_empty_cell_continues() {
        let mut rows = CHECKER;
        rows[2][1] = 0;
        assert!(can_continue(&Board::from_rows(rows), 15));
        assert!(can_continue(&Board::EMPTY, 0));
    }

    #[test]
    fn test_full_without_pairs_is_over() {
        assert!(!can_continue(&Board::from_rows(CHECKER), 16));
    }

    #[test]
    fn test_full_with_horizontal_pair() {
        let mut rows = CHECKER;
        rows[3][3] = 4;
        assert!(can_continue(&Board::from_rows(rows), 16));
    }

    #[test]
    fn test_full_with_vertical_pair() {
        let mut rows = CHECKER;
        rows[0][0] = 4;
        assert!(can_continue(&Board::from_rows(rows), 16));
    }

    #[test]
    fn test_pair_on_far_edge() {
        let rows = [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [8, 16, 32, 4],
        ];
        // (2,3) and (3,3) are both 4
        assert!(can_continue(&Board::from_rows(rows), 16));
    }

    #[test]
    fn test_status() {
        assert_eq!(GameStatus::default(), GameStatus::Playing);
        assert_eq!(GameStatus::from_verdict(false), GameStatus::Over);
        assert!(GameStatus::Over.is_over());
        assert!(!GameStatus::from_verdict(true).is_over());
    }
}
