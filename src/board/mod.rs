//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Default board size (11x11)
pub const BOARD_SIZE: usize = 11;

/// Largest board a `Pos` can address
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Cell character used by the text board format
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'b',
            Stone::White => 'w',
        }
    }

    /// Parse a cell character (`.`, `b`, `w`, case-insensitive)
    pub fn from_char(c: char) -> Option<Stone> {
        match c.to_ascii_lowercase() {
            '.' => Some(Stone::Empty),
            'b' => Some(Stone::Black),
            'w' => Some(Stone::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Empty => write!(f, "empty"),
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

/// Position on the board (0-indexed row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this position by `(dr, dc)` steps, staying inside a board of `size`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
