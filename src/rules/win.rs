//! Five-in-a-row detection
//!
//! A win can only be created by the stone just placed, so the search only
//! ever inspects the four lines through the last move. The whole-board scan
//! is reserved for classifying positions handed in by a caller.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Count same-colored stones from `pos` stepping by `(dr, dc)`,
/// excluding `pos` itself. Stops at the edge or the first differing cell.
pub fn count_run(board: &Board, pos: Pos, dr: i32, dc: i32) -> usize {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return 0;
    }

    let mut count = 0;
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc, board.size()) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Check whether the stone at `pos` completes five or more in a row.
///
/// Returns the winning color, or `None` if `pos` is empty or no line
/// through it reaches `WIN_LENGTH`.
pub fn check_win(board: &Board, pos: Pos) -> Option<Stone> {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return None;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_run(board, pos, dr, dc) + count_run(board, pos, -dr, -dc) + 1 >= WIN_LENGTH)
        .then_some(stone)
}

/// Positions of the winning line through `pos`, if any.
///
/// The line is returned in order along its direction and holds every
/// contiguous stone, so overlines yield more than five positions.
pub fn five_line_at(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_run(board, pos, -dr, -dc);
        let forward = count_run(board, pos, dr, dc);
        if back + forward + 1 < WIN_LENGTH {
            continue;
        }

        let start_r = pos.row as i32 - dr * back as i32;
        let start_c = pos.col as i32 - dc * back as i32;
        let line = (0..=(back + forward) as i32)
            .map(|i| Pos::new((start_r + dr * i) as u8, (start_c + dc * i) as u8))
            .collect();
        return Some(line);
    }
    None
}

/// Scan every stone for a completed five.
///
/// Returns the first winner found in row-major order. Positions where both
/// colors own a five are malformed game records; the earlier stone wins.
pub fn find_winner(board: &Board) -> Option<Stone> {
    board.occupied().find_map(|(pos, _)| check_win(board, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], stone: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
        board
    }

    #[test]
    fn test_vertical_five_wins() {
        let board = board_with(&[(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)], Stone::Black);
        assert_eq!(check_win(&board, Pos::new(7, 5)), Some(Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(3, 5), (4, 5), (5, 5), (6, 5)], Stone::Black);
        assert_eq!(check_win(&board, Pos::new(6, 5)), None);
    }

    #[test]
    fn test_horizontal_five_from_middle() {
        let board = board_with(&[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)], Stone::White);
        assert_eq!(check_win(&board, Pos::new(2, 2)), Some(Stone::White));
    }

    #[test]
    fn test_diagonal_fives() {
        let se = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::Black);
        assert_eq!(check_win(&se, Pos::new(4, 4)), Some(Stone::Black));

        let sw = board_with(&[(2, 8), (3, 7), (4, 6), (5, 5), (6, 4)], Stone::White);
        assert_eq!(check_win(&sw, Pos::new(4, 6)), Some(Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4), (9, 5)], Stone::Black);
        assert_eq!(check_win(&board, Pos::new(9, 5)), Some(Stone::Black));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = board_with(&[(5, 0), (5, 1), (5, 3), (5, 4), (5, 5)], Stone::Black);
        board.place_stone(Pos::new(5, 2), Stone::White);
        assert_eq!(check_win(&board, Pos::new(5, 5)), None);
    }

    #[test]
    fn test_five_at_board_corner() {
        let board = board_with(&[(6, 6), (7, 7), (8, 8), (9, 9), (10, 10)], Stone::White);
        assert_eq!(check_win(&board, Pos::new(10, 10)), Some(Stone::White));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert_eq!(check_win(&board, Pos::new(5, 5)), None);
        assert!(five_line_at(&board, Pos::new(5, 5)).is_none());
    }

    #[test]
    fn test_count_run_excludes_origin() {
        let board = board_with(&[(5, 5), (5, 6), (5, 7)], Stone::Black);
        assert_eq!(count_run(&board, Pos::new(5, 5), 0, 1), 2);
        assert_eq!(count_run(&board, Pos::new(5, 5), 0, -1), 0);
    }

    #[test]
    fn test_winning_line_is_contiguous_and_uniform() {
        let board = board_with(&[(1, 8), (2, 7), (3, 6), (4, 5), (5, 4)], Stone::Black);
        let line = five_line_at(&board, Pos::new(3, 6)).unwrap();
        assert_eq!(line.len(), 5);
        assert!(line.iter().all(|&p| board.get(p) == Stone::Black));
        for pair in line.windows(2) {
            assert_eq!(pair[1].row as i32 - pair[0].row as i32, 1);
            assert_eq!(pair[1].col as i32 - pair[0].col as i32, -1);
        }
    }

    #[test]
    fn test_find_winner_scans_board() {
        let board = board_with(&[(0, 10), (1, 10), (2, 10), (3, 10), (4, 10)], Stone::White);
        assert_eq!(find_winner(&board), Some(Stone::White));
        assert_eq!(find_winner(&Board::new()), None);
    }
}
