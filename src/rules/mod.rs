//! Game rules for Gomoku
//!
//! This module implements the rule set used by the search:
//! - Win condition (five or more in a row, overlines allowed)
//! - Local candidate move generation

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{candidate_moves, padded_bounds, pick_random};
pub use win::{check_win, count_run, find_winner, five_line_at, WIN_LENGTH};
