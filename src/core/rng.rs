//! Deterministic random number generation for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn sequence
//! - **Injectable**: The engine only sees the `RandomSource` trait
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let row = rng.next_index(4);
//! assert!(row < 4);
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_index(16), b.next_index(16));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by the spawn policy.
///
/// The engine never touches a concrete RNG. Sessions are generic over this
/// trait so tests can supply fixed sequences.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// `true` with the given probability.
    fn next_bool(&mut self, probability: f64) -> bool;
}

/// Seedable RNG backing a normal game session.
///
/// Uses ChaCha8 for speed while keeping the sequence stable across
/// platforms and releases of `rand`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn next_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) capture regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of indices and coin flips.
///
/// Indices are reduced modulo the requested bound. When the index queue
/// runs dry, successive pairs of draws walk the grid row-major
/// (`(0,0)`, `(0,1)`, ... `(3,3)`, then again), so reject-and-retry
/// sampling always finds an empty cell. Exhausted coin flips return
/// `false`.
///
/// ```
/// use rust_2048::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([1, 2], [true]);
/// assert_eq!(rng.next_index(4), 1);
/// assert_eq!(rng.next_index(4), 2);
/// assert!(rng.next_bool(0.1));
/// assert!(!rng.next_bool(0.1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: VecDeque<usize>,
    flips: VecDeque<bool>,
    overflow: usize,
}

impl ScriptedRng {
    /// Create a scripted source from index and coin-flip sequences.
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        flips: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            flips: flips.into_iter().collect(),
            overflow: 0,
        }
    }

    /// Script that places tiles at the given `(row, col)` cells in order.
    ///
    /// Every placement is a 2 unless the matching entry in `fours` is set.
    pub fn placing(cells: &[(usize, usize)], fours: &[bool]) -> Self {
        let indices = cells.iter().flat_map(|&(row, col)| [row, col]);
        Self::new(indices, fours.iter().copied())
    }

    /// Number of scripted indices not yet consumed.
    #[must_use]
    pub fn remaining_indices(&self) -> usize {
        self.indices.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if let Some(i) = self.indices.pop_front() {
            return i % bound;
        }
        let draw = self.overflow;
        self.overflow += 1;
        let cell = draw / 2;
        if draw % 2 == 0 {
            (cell / bound) % bound
        } else {
            cell % bound
        }
    }

    fn next_bool(&mut self, _probability: f64) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(1000), rng2.next_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_in_bounds() {
        let mut rng = GameRng::new(9);
        for _ in 0..500 {
            assert!(rng.next_index(4) < 4);
        }
    }

    #[test]
    fn test_bool_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(!rng.next_bool(0.0));
            assert!(rng.next_bool(1.0));
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.next_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_index(1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_wraps_and_exhausts() {
        let mut rng = ScriptedRng::new([5, 3], Vec::new());
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(rng.remaining_indices(), 1);
        assert_eq!(rng.next_index(4), 3);
        assert!(!rng.next_bool(0.9));

        // Overflow walks (0,0), (0,1), (0,2), ...
        let walked: Vec<_> = (0..6).map(|_| rng.next_index(4)).collect();
        assert_eq!(walked, vec![0, 0, 0, 1, 0, 2]);
    }

    #[test]
    fn test_scripted_overflow_covers_grid() {
        let mut rng = ScriptedRng::default();
        let mut seen = [[false; 4]; 4];
        for _ in 0..16 {
            let (r, c) = (rng.next_index(4), rng.next_index(4));
            seen[r][c] = true;
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn test_scripted_placing() {
        let mut rng = ScriptedRng::placing(&[(2, 1), (0, 3)], &[false, true]);
        assert_eq!((rng.next_index(4), rng.next_index(4)), (2, 1));
        assert!(!rng.next_bool(0.1));
        assert_eq!((rng.next_index(4), rng.next_index(4)), (0, 3));
        assert!(rng.next_bool(0.1));
    }
}
