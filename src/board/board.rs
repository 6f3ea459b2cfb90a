//! Board structure with cell grid

use std::fmt;
use std::str::FromStr;

use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Square game board of `size` x `size` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board of the default size
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Create an empty board of the given size.
    ///
    /// Sizes outside `1..=MAX_BOARD_SIZE` are clamped; use
    /// [`Board::from_rows`] for validated construction.
    pub fn with_size(size: usize) -> Self {
        let size = size.clamp(1, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Build a board from rows of cells, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<Stone>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidBoard("board has no rows".to_string()));
        }
        if size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "board size {size} exceeds maximum {MAX_BOARD_SIZE}"
            )));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidBoard(format!(
                    "row {r} has {} cells, expected {size}",
                    row.len()
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position (off-board reads as empty)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[self.index(pos)] == Stone::Empty
    }

    /// Write a stone unconditionally (setup helper)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = stone;
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Center cell, the only sensible opening move
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = ((self.size - 1) / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, stone)| **stone != Stone::Empty)
            .map(move |(idx, &stone)| (Pos::new((idx / size) as u8, (idx % size) as u8), stone))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one row per line: `.` empty, `b` black, `w` white.
/// Blank lines and whitespace between cells are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| Stone::from_char(c).ok_or(EngineError::InvalidCell(c)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|s| s.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
