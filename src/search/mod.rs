//! Search module for Gomoku AI
//!
//! Contains:
//! - Arena search tree with node statistics
//! - Monte-Carlo Tree Search with UCT selection and random rollouts

pub mod mcts;
pub mod tree;

pub use mcts::{Mcts, SearchLimits, SearchStats, DEFAULT_EXPLORATION, EXHAUSTED_BOARD_WINNER};
pub use tree::{Node, NodeId, SearchTree};
