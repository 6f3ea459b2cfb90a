//! Move-selection engine wrapping the Monte-Carlo Tree Search
//!
//! The engine is built once per position and side to move. Every call to
//! [`MctsEngine::decide`] grows a fresh tree for the configured budget and
//! returns the root move with the best average reward; nothing is carried
//! over between calls.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, EngineConfig, MctsEngine, Pos, Stone};
//! use std::time::Duration;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(5, 5), Stone::Black);
//!
//! // Short budget for the doc test
//! let config = EngineConfig {
//!     time_limit: Duration::from_millis(200),
//!     max_iterations: Some(200),
//!     ..EngineConfig::default()
//! };
//! let mut engine = MctsEngine::seeded(board.clone(), Stone::White, config, 7).unwrap();
//! let result = engine.decide_with_stats().unwrap();
//! assert!(board.is_empty(result.best_move));
//! println!("White plays {} after {} iterations", result.best_move, result.iterations);
//! ```

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::board::{Board, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::search::{Mcts, SearchLimits, DEFAULT_EXPLORATION, EXHAUSTED_BOARD_WINNER};
use crate::state::BoardState;

/// Default thinking time per decision
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(15);

/// Engine parameters.
///
/// Defaults: 11x11 board, 15 seconds per decision, exploration constant 2,
/// exhausted games credited to White, no iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub board_size: usize,
    pub time_limit: Duration,
    /// UCT exploration constant `C`
    pub exploration: f64,
    /// Winner declared when a playout runs out of candidate moves
    pub exhausted_winner: Stone,
    /// Stop after this many iterations even if time remains
    pub max_iterations: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            time_limit: DEFAULT_TIME_LIMIT,
            exploration: DEFAULT_EXPLORATION,
            exhausted_winner: EXHAUSTED_BOARD_WINNER,
            max_iterations: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "board size must be between 1 and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "exploration constant must be positive, got {}",
                self.exploration
            )));
        }
        if self.exhausted_winner == Stone::Empty {
            return Err(EngineError::InvalidConfig(
                "exhausted-board winner must be black or white".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(EngineError::InvalidConfig(
                "iteration cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    fn limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit,
            max_iterations: self.max_iterations,
        }
    }
}

/// Result of a decision with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Iterations completed
    pub iterations: u64,
    /// Nodes in the tree when the search stopped
    pub nodes: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Visits of the chosen child
    pub visits: u32,
    /// Average reward of the chosen child
    pub mean_value: f64,
}

/// MCTS move-selection engine for one position.
///
/// The random generator is owned by the engine so searches can be made
/// reproducible by seeding it.
pub struct MctsEngine<R: Rng = Pcg64> {
    root: BoardState,
    config: EngineConfig,
    rng: R,
}

impl MctsEngine<Pcg64> {
    /// Create an engine seeded from system entropy.
    pub fn new(board: Board, to_move: Stone, config: EngineConfig) -> Result<Self> {
        Self::with_rng(board, to_move, config, Pcg64::from_entropy())
    }

    /// Create an engine with a reproducible generator.
    pub fn seeded(board: Board, to_move: Stone, config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(board, to_move, config, Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> MctsEngine<R> {
    /// Create an engine using the given generator.
    ///
    /// Rejects an empty side to move, an invalid configuration, and a board
    /// whose size differs from `config.board_size`.
    pub fn with_rng(board: Board, to_move: Stone, config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        if to_move == Stone::Empty {
            return Err(EngineError::InvalidStone);
        }
        if board.size() != config.board_size {
            return Err(EngineError::InvalidBoard(format!(
                "expected a {n}x{n} board, got {m}x{m}",
                n = config.board_size,
                m = board.size()
            )));
        }

        Ok(Self {
            root: BoardState::new(board, to_move),
            config,
            rng,
        })
    }

    #[inline]
    pub fn root(&self) -> &BoardState {
        &self.root
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search for the configured budget and return the chosen move.
    ///
    /// Blocks for up to `time_limit`. The move is always an empty cell.
    pub fn decide(&mut self) -> Result<Pos> {
        self.decide_with_stats().map(|result| result.best_move)
    }

    /// Like [`decide`](Self::decide), with search statistics.
    ///
    /// Fails with [`EngineError::TerminalPosition`] if the position already
    /// holds a five or has no candidate move.
    pub fn decide_with_stats(&mut self) -> Result<MoveResult> {
        self.ensure_playable()?;

        let mut mcts = Mcts::new(
            self.root.clone(),
            self.config.exploration,
            self.config.exhausted_winner,
        );
        let stats = mcts.search(self.config.limits(), &mut self.rng);

        let no_move = || EngineError::TerminalPosition {
            winner: self.root.winner(),
        };
        let node = mcts
            .root_best_child()
            .map(|id| mcts.tree().get(id))
            .ok_or_else(no_move)?;
        let best_move = node.mv.ok_or_else(no_move)?;

        let result = MoveResult {
            best_move,
            iterations: stats.iterations,
            nodes: stats.nodes,
            time_ms: stats.elapsed.as_millis() as u64,
            visits: node.visits,
            mean_value: node.mean_value().unwrap_or(0.0),
        };

        log::debug!(
            "{} to move: chose {} (visits {}, mean {:.3}) after {} iterations, {} nodes, {}ms",
            self.root.to_move(),
            result.best_move,
            result.visits,
            result.mean_value,
            result.iterations,
            result.nodes,
            result.time_ms
        );

        Ok(result)
    }

    fn ensure_playable(&self) -> Result<()> {
        let mut probe = self.root.clone();
        if probe.is_terminal() || probe.candidate_moves().is_empty() {
            return Err(EngineError::TerminalPosition {
                winner: probe.winner(),
            });
        }
        Ok(())
    }
}
