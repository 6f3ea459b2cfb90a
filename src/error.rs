//! Error types surfaced to callers of the engine

use crate::board::Stone;

/// Errors returned by board construction and the engine entry points.
///
/// Running out of candidate moves during search is not an error: it is a
/// forced-terminal transition handled inside the search.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed board (non-square, empty, too large, or wrong size)
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Unrecognised character in the text board format
    #[error("invalid cell character {0:?} (expected '.', 'b' or 'w')")]
    InvalidCell(char),

    /// `Stone::Empty` given as the side to move
    #[error("side to move must be black or white")]
    InvalidStone,

    /// The root position is already decided, there is nothing to search
    #[error("position is already terminal (winner: {})", describe_winner(.winner))]
    TerminalPosition { winner: Option<Stone> },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

fn describe_winner(winner: &Option<Stone>) -> String {
    match winner {
        Some(stone) => stone.to_string(),
        None => "none".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
