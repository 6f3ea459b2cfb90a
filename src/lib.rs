//! Gomoku move engine based on Monte-Carlo Tree Search
//!
//! Picks a move for a five-in-a-row position on an 11x11 board by running
//! random playouts under a time budget:
//! - Five or more stones in a row wins (overlines allowed)
//! - Candidate moves are the empty cells around the existing stones
//! - Selection follows the UCT bandit formula
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and text format
//! - [`rules`]: Win detection and candidate move generation
//! - [`state`]: Positions with side to move and game result
//! - [`search`]: Search tree and the MCTS phases
//! - [`engine`]: Configured engine returning a move for a position
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, EngineConfig, MctsEngine, Pos, Stone};
//! use std::time::Duration;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(5, 5), Stone::Black);
//!
//! // Iteration cap keeps the doc test fast; the default budget is 15 seconds
//! let config = EngineConfig {
//!     time_limit: Duration::from_secs(5),
//!     max_iterations: Some(100),
//!     ..EngineConfig::default()
//! };
//!
//! let mut engine = MctsEngine::seeded(board.clone(), Stone::White, config, 42).unwrap();
//! let pos = engine.decide().unwrap();
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{EngineConfig, MctsEngine, MoveResult};
pub use error::EngineError;
pub use state::BoardState;
