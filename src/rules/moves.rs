//! Candidate move generation
//!
//! Useful moves cluster around existing stones, so candidates are limited
//! to the empty cells of the occupied area's bounding box grown by one cell.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos};

/// Cells added around the occupied bounding box
pub const BOX_PADDING: usize = 1;

/// Inclusive row/column bounds of the padded occupied area, or `None` for
/// an empty board.
pub fn padded_bounds(board: &Board) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (pos, _) in board.occupied() {
        let (r, c) = (pos.row as usize, pos.col as usize);
        bounds = Some(match bounds {
            None => (r, r, c, c),
            Some((min_r, max_r, min_c, max_c)) => {
                (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c))
            }
        });
    }

    let last = board.size() - 1;
    bounds.map(|(min_r, max_r, min_c, max_c)| {
        (
            min_r.saturating_sub(BOX_PADDING),
            (max_r + BOX_PADDING).min(last),
            min_c.saturating_sub(BOX_PADDING),
            (max_c + BOX_PADDING).min(last),
        )
    })
}

/// Candidate moves for `board` in row-major order.
///
/// An empty board yields only the center. An empty result means the padded
/// box is full; callers treat that as a forced end of the game.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let Some((min_r, max_r, min_c, max_c)) = padded_bounds(board) else {
        return vec![board.center()];
    };

    let mut moves = Vec::with_capacity((max_r - min_r + 1) * (max_c - min_c + 1));
    for r in min_r..=max_r {
        for c in min_c..=max_c {
            let pos = Pos::new(r as u8, c as u8);
            if board.is_empty(pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Uniformly pick one of `moves`, `None` when there are none.
#[inline]
pub fn pick_random<R: Rng + ?Sized>(moves: &[Pos], rng: &mut R) -> Option<Pos> {
    moves.choose(rng).copied()
}
