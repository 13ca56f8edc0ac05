//! Tile spawn policy.

use serde::{Deserialize, Serialize};

use crate::core::{Board, RandomSource, CELL_COUNT, SIZE};

/// A tile placed by the spawn policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    /// Always 2 or 4.
    pub value: u32,
}

/// Place one tile in a uniformly random empty cell.
///
/// Samples `(row, col)` until it hits an empty cell, then writes a 4 with
/// probability `four_probability` and a 2 otherwise. `tile_count` is the
/// number of occupied cells; when it is 16 nothing happens and `None` is
/// returned.
///
/// ```
/// use rust_2048::core::{Board, ScriptedRng};
/// use rust_2048::rules::spawn_tile;
///
/// let mut board = Board::EMPTY;
/// let mut rng = ScriptedRng::placing(&[(1, 2)], &[true]);
/// let spawn = spawn_tile(&mut board, 0, &mut rng, 0.1).unwrap();
/// assert_eq!((spawn.row, spawn.col, spawn.value), (1, 2, 4));
/// assert_eq!(board[(1, 2)], 4);
/// ```
pub fn spawn_tile<R: RandomSource + ?Sized>(
    board: &mut Board,
    tile_count: usize,
    rng: &mut R,
    four_probability: f64,
) -> Option<Spawn> {
    debug_assert_eq!(tile_count, board.tile_count());
    if tile_count >= CELL_COUNT {
        return None;
    }

    loop {
        let row = rng.next_index(SIZE);
        let col = rng.next_index(SIZE);
        if board[(row, col)] != 0 {
            continue;
        }

        let value = if rng.next_bool(four_probability) { 4 } else { 2 };
        board[(row, col)] = value;
        log::trace!("spawned {value} at ({row}, {col})");
        return Some(Spawn { row, col, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_spawn_on_empty_board() {
        let mut board = Board::EMPTY;
        let mut rng = ScriptedRng::placing(&[(3, 0)], &[false]);

        let spawn = spawn_tile(&mut board, 0, &mut rng, 0.1).unwrap();

        assert_eq!(spawn, Spawn { row: 3, col: 0, value: 2 });
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_retries_occupied_cells() {
        let mut board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut rng = ScriptedRng::placing(&[(0, 0), (0, 1), (0, 2)], &[true]);

        let spawn = spawn_tile(&mut board, 2, &mut rng, 0.1).unwrap();

        assert_eq!(spawn, Spawn { row: 0, col: 2, value: 4 });
        assert_eq!(board.rows()[0], [2, 4, 4, 0]);
        assert_eq!(rng.remaining_indices(), 0);
    }

    #[test]
    fn test_full_board_is_noop() {
        let mut board = Board::from_rows([[2; 4]; 4]);
        let mut rng = GameRng::new(1);

        assert_eq!(spawn_tile(&mut board, 16, &mut rng, 0.1), None);
        assert_eq!(board, Board::from_rows([[2; 4]; 4]));
    }

    #[test]
    fn test_exactly_one_tile() {
        let mut rng = GameRng::new(5);
        let mut board = Board::EMPTY;
        for count in 0..CELL_COUNT {
            let before = board;
            let spawn = spawn_tile(&mut board, count, &mut rng, 0.1).unwrap();
            assert_eq!(before[(spawn.row, spawn.col)], 0);
            assert!(spawn.value == 2 || spawn.value == 4);
            assert_eq!(board.tile_count(), count + 1);
        }
        assert_eq!(spawn_tile(&mut board, CELL_COUNT, &mut rng, 0.1), None);
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = GameRng::new(11);

        let mut board = Board::EMPTY;
        for count in 0..8 {
            let spawn = spawn_tile(&mut board, count, &mut rng, 0.0).unwrap();
            assert_eq!(spawn.value, 2);
        }

        let mut board = Board::EMPTY;
        for count in 0..8 {
            let spawn = spawn_tile(&mut board, count, &mut rng, 1.0).unwrap();
            assert_eq!(spawn.value, 4);
        }
    }
}
