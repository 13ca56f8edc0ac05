//! Game session implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Direction, EngineConfig, GameRng, RandomSource, Result};
use crate::rules::{can_continue, can_shift, shift, spawn_tile, GameStatus, Merge, Spawn};

/// What a single move did.
///
/// Serializable so a front-end can ship it wherever it renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Direction that was requested.
    pub direction: Direction,
    /// Whether any tile slid or merged.
    pub changed: bool,
    /// Merges in board coordinates, where the merged tile came to rest.
    pub merges: SmallVec<[Merge; 8]>,
    /// Points added to the score by this move.
    pub score_gained: u64,
    /// The tile spawned afterwards. `None` exactly when nothing changed.
    pub spawned: Option<Spawn>,
    /// Whether play can continue after this move.
    pub can_continue: bool,
}

impl MoveOutcome {
    fn refused(direction: Direction) -> Self {
        Self {
            direction,
            changed: false,
            merges: SmallVec::new(),
            score_gained: 0,
            spawned: None,
            can_continue: false,
        }
    }
}

/// One game from first spawn to game over.
///
/// The session exclusively owns the board, its tile count, the score, and
/// the random source. Separate sessions never share state.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Direction, EngineConfig};
/// use rust_2048::session::Game;
///
/// let mut game = Game::new(EngineConfig::default().with_seed(7))?;
/// assert_eq!(game.tile_count(), 2);
///
/// let before = game.current_score();
/// let _playing = game.make_move(Direction::Left);
/// assert!(game.current_score() >= before);
/// assert!(game.value_at(4, 0).is_err());
/// # Ok::<(), rust_2048::core::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    board: Board,
    tile_count: usize,
    score: u64,
    status: GameStatus,
    four_probability: f64,
    rng: R,
}

impl Game<GameRng> {
    /// Start a new game seeded from `config.seed`.
    ///
    /// Fails with `InvalidConfig` if the config is out of range.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(rng, &config)
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a new game drawing randomness from `rng`.
    ///
    /// Places `config.initial_tiles` tiles in distinct empty cells before
    /// returning. `config.seed` is ignored; the caller owns seeding.
    /// Fails with `InvalidConfig` if the config is out of range.
    pub fn with_rng(rng: R, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            board: Board::EMPTY,
            tile_count: 0,
            score: 0,
            status: GameStatus::Playing,
            four_probability: config.four_probability,
            rng,
        };
        for _ in 0..config.initial_tiles {
            game.spawn();
        }
        game.status = GameStatus::from_verdict(can_continue(&game.board, game.tile_count));
        Ok(game)
    }

    /// Resume from a known position with a score of zero.
    ///
    /// Fails with `InvalidTile` if any cell is neither 0 nor a power of two,
    /// or `InvalidConfig` if the config is out of range. A position with no
    /// remaining moves starts out `Over`.
    pub fn from_board(board: Board, rng: R, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        board.validate()?;
        let tile_count = board.tile_count();
        Ok(Self {
            board,
            tile_count,
            score: 0,
            status: GameStatus::from_verdict(can_continue(&board, tile_count)),
            four_probability: config.four_probability,
            rng,
        })
    }

    /// Slide toward `direction`, spawn if anything changed, and report.
    ///
    /// A move that changes nothing leaves score, tile count, and board
    /// untouched. Once the game is over every move is refused.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_over() {
            log::warn!("move {direction} requested after game over");
            return MoveOutcome::refused(direction);
        }

        let result = shift(&mut self.board, direction);
        self.tile_count -= result.merge_count();
        self.score += result.score_gained;

        let spawned = if result.changed { self.spawn() } else { None };

        let verdict = can_continue(&self.board, self.tile_count);
        self.status = GameStatus::from_verdict(verdict);

        if result.changed {
            log::debug!(
                "moved {direction}: {} merge(s), +{} (score {})",
                result.merge_count(),
                result.score_gained,
                self.score
            );
        }
        if !verdict {
            log::info!("game over with score {}", self.score);
        }

        MoveOutcome {
            direction,
            changed: result.changed,
            merges: result.merges,
            score_gained: result.score_gained,
            spawned,
            can_continue: verdict,
        }
    }

    /// Make a move. Returns whether the game can continue afterwards.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        self.apply_move(direction).can_continue
    }

    pub fn up(&mut self) -> bool {
        self.make_move(Direction::Up)
    }

    pub fn down(&mut self) -> bool {
        self.make_move(Direction::Down)
    }

    pub fn left(&mut self) -> bool {
        self.make_move(Direction::Left)
    }

    pub fn right(&mut self) -> bool {
        self.make_move(Direction::Right)
    }

    /// Value of the cell at `(row, col)`; 0 when empty.
    ///
    /// Fails with `OutOfRange` when either coordinate is outside `0..=3`.
    pub fn value_at(&self, row: isize, col: isize) -> Result<u32> {
        self.board.value_at(row, col)
    }

    /// Total of all merged tile values so far.
    #[must_use]
    pub fn current_score(&self) -> u64 {
        self.score
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Copy-free view of the grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    /// Would moving toward `direction` change the board? Does not mutate.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.status.is_over() && can_shift(&self.board, direction)
    }

    /// Directions that would change the board, in `Direction::ALL` order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    /// The random source driving spawns.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn spawn(&mut self) -> Option<Spawn> {
        let spawned = spawn_tile(
            &mut self.board,
            self.tile_count,
            &mut self.rng,
            self.four_probability,
        );
        if spawned.is_some() {
            self.tile_count += 1;
        }
        spawned
    }
}
